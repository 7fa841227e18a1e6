// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod classifier;
pub mod platform;
pub mod strava;

pub use activity::{ActivityOutcome, ActivitySorter, RunSummary, DEFAULT_LOOKBACK_DAYS};
pub use classifier::{classify, is_commute, is_walking, is_yoga, Classification};
pub use platform::ActivityPlatform;
pub use strava::StravaClient;
