// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;

/// Application error type.
///
/// Only `Config` and `TokenExchange` abort a run. Strava API errors on
/// individual requests are logged by the client and turned into empty
/// results or `false`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch access token: {0}")]
    TokenExchange(String),

    #[error("Strava API error: {0}")]
    StravaApi(String),
}

impl AppError {
    /// Message used for HTTP 429 responses from Strava.
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";

    /// Message used for HTTP 401 responses from Strava.
    pub const STRAVA_TOKEN_ERROR: &'static str = "Invalid or expired access token";

    /// True if Strava rejected the access token (expired, revoked, or
    /// missing the `activity:write` scope).
    pub fn is_strava_token_error(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_TOKEN_ERROR)
    }

    /// True if Strava rejected the request because of rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_RATE_LIMIT)
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
