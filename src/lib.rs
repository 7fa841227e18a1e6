// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity sorter: light bookkeeping for recent activities.
//!
//! Fetches recent activities, marks short Garmin rides as commutes, and
//! hides commutes, walks and yoga sessions from followers' home feeds.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
