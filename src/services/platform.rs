// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Seam between the sorter and the fitness platform's API.

use crate::error::Result;
use crate::models::Activity;
use async_trait::async_trait;

/// Operations the sorter needs from the platform.
///
/// Only the token exchange can fail. Fetch and update failures are
/// reported by the implementation and surface as an empty list or `false`.
#[async_trait]
pub trait ActivityPlatform: Send + Sync {
    /// Exchange the stored refresh token for a short-lived access token.
    async fn get_access_token(&self) -> Result<String>;

    /// Activities that started within the last `days` days.
    async fn get_recent_activities(&self, access_token: &str, days: u32) -> Vec<Activity>;

    /// Flag an activity as a commute. Returns true on success.
    async fn mark_activity_as_commute(&self, access_token: &str, activity_id: u64) -> bool;

    /// Hide an activity from followers' home feeds. Returns true on success.
    async fn hide_activity_from_home(&self, access_token: &str, activity_id: u64) -> bool;
}
