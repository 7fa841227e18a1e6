// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching and updating activities.
//!
//! Handles:
//! - Access token refresh from the stored refresh token
//! - Listing recent activities (paginated)
//! - Commute / hide-from-home flag updates
//! - Rate limit and token error detection

use crate::config::Config;
use crate::error::AppError;
use crate::models::Activity;
use crate::services::platform::ActivityPlatform;
use crate::time_utils::{format_utc_rfc3339, lookback_cutoff};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Page size for the athlete activities endpoint (Strava maximum is 200).
pub const ACTIVITIES_PER_PAGE: u32 = 100;

/// Upper bound on pages fetched in one run.
const MAX_PAGES: u32 = 10;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl StravaClient {
    /// Create a new Strava client from OAuth credentials and endpoint URLs.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            oauth_url: config.oauth_url.clone(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
            refresh_token: config.strava_refresh_token.clone(),
        }
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Fails if the response body has no `access_token`, whatever the status.
    pub async fn refresh_access_token(&self) -> Result<TokenRefreshResponse, AppError> {
        let response = self
            .http
            .post(&self.oauth_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::TokenExchange(format!("Token refresh request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let tokens: TokenRefreshResponse = serde_json::from_str(&body).map_err(|_| {
            tracing::error!(status = %status, body = %body, "Strava token refresh failed");
            AppError::TokenExchange(format!("HTTP {}: {}", status, body))
        })?;

        if tokens
            .refresh_token
            .as_deref()
            .is_some_and(|t| t != self.refresh_token)
        {
            tracing::warn!("Strava issued a new refresh token; update STRAVA_REFRESH_TOKEN");
        }

        Ok(tokens)
    }

    /// List one page of activities that started after `after` (Unix timestamp).
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("after", after.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        if !response.status().is_success() {
            return Err(response_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }

    /// List every activity that started after `after`, following pages.
    pub async fn list_all_activities(
        &self,
        access_token: &str,
        after: i64,
    ) -> Result<Vec<Activity>, AppError> {
        let mut activities = Vec::new();

        for page in 1..=MAX_PAGES {
            let batch = self
                .list_activities(access_token, after, page, ACTIVITIES_PER_PAGE)
                .await?;
            let count = batch.len();
            activities.extend(batch);

            if count < ACTIVITIES_PER_PAGE as usize {
                return Ok(activities);
            }
        }

        tracing::warn!(
            pages = MAX_PAGES,
            count = activities.len(),
            "Stopped paging activities at page limit"
        );
        Ok(activities)
    }

    /// Apply a flag update to an activity. Only HTTP 200 counts as success.
    pub async fn update_activity(
        &self,
        access_token: &str,
        activity_id: u64,
        update: &ActivityUpdate,
    ) -> Result<(), AppError> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);

        let response = self
            .http
            .put(&url)
            .bearer_auth(access_token)
            .form(update)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(response_error(response).await);
        }
        Ok(())
    }

    /// Run an update, logging instead of propagating failures.
    async fn try_update(
        &self,
        access_token: &str,
        activity_id: u64,
        update: ActivityUpdate,
    ) -> bool {
        match self.update_activity(access_token, activity_id, &update).await {
            Ok(()) => true,
            Err(e) => {
                if e.is_rate_limited() {
                    tracing::warn!(activity_id, ?update, "Strava rate limit hit, update skipped");
                } else if e.is_strava_token_error() {
                    tracing::error!(
                        activity_id,
                        ?update,
                        "Strava rejected the access token, check activity:write scope"
                    );
                } else {
                    tracing::error!(activity_id, ?update, error = %e, "Activity update failed");
                }
                false
            }
        }
    }
}

#[async_trait]
impl ActivityPlatform for StravaClient {
    async fn get_access_token(&self) -> Result<String, AppError> {
        let tokens = self.refresh_access_token().await?;
        tracing::debug!(expires_at = ?tokens.expires_at, "Access token refreshed");
        Ok(tokens.access_token)
    }

    async fn get_recent_activities(&self, access_token: &str, days: u32) -> Vec<Activity> {
        let cutoff = lookback_cutoff(Utc::now(), days);
        tracing::info!(days, after = %format_utc_rfc3339(cutoff), "Fetching recent activities");

        match self.list_all_activities(access_token, cutoff.timestamp()).await {
            Ok(activities) => activities,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch activities");
                Vec::new()
            }
        }
    }

    async fn mark_activity_as_commute(&self, access_token: &str, activity_id: u64) -> bool {
        self.try_update(access_token, activity_id, ActivityUpdate::commute())
            .await
    }

    async fn hide_activity_from_home(&self, access_token: &str, activity_id: u64) -> bool {
        self.try_update(access_token, activity_id, ActivityUpdate::hide_from_home())
            .await
    }
}

/// Build an error from a failed response, classifying 401 and 429.
async fn response_error(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    // Rate limit
    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!("Strava rate limit hit (429)");
        return AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string());
    }

    // Unauthorized - token expired or missing activity:write scope
    if status == StatusCode::UNAUTHORIZED {
        return AppError::StravaApi(AppError::STRAVA_TOKEN_ERROR.to_string());
    }

    AppError::StravaApi(format!("HTTP {}: {}", status, body))
}

/// Token refresh response from Strava.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Form body for `PUT /activities/{id}`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_home: Option<bool>,
}

impl ActivityUpdate {
    pub fn commute() -> Self {
        Self {
            commute: Some(true),
            ..Self::default()
        }
    }

    pub fn hide_from_home() -> Self {
        Self {
            hide_from_home: Some(true),
            ..Self::default()
        }
    }
}
