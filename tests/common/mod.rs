// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use strava_activity_sorter::error::{AppError, Result};
use strava_activity_sorter::models::Activity;
use strava_activity_sorter::services::ActivityPlatform;

pub const FIXTURE_PATH: &str = "tests/fixtures/recent_activities.json";

/// Load the recorded activity list used across tests.
#[allow(dead_code)]
pub fn load_fixture() -> Vec<Activity> {
    let json = std::fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

/// Mutation issued against the fake platform.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MarkCommute(u64),
    Hide(u64),
}

/// In-memory platform that records every call.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakePlatform {
    pub activities: Vec<Activity>,
    pub fail_token: bool,
    /// Activity IDs whose updates return false.
    pub failing_ids: HashSet<u64>,
    pub calls: Mutex<Vec<Call>>,
    pub requested_days: Mutex<Option<u32>>,
}

#[allow(dead_code)]
impl FakePlatform {
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, activity_id: u64) -> bool {
        self.calls.lock().unwrap().push(call);
        !self.failing_ids.contains(&activity_id)
    }
}

#[async_trait]
impl ActivityPlatform for FakePlatform {
    async fn get_access_token(&self) -> Result<String> {
        if self.fail_token {
            return Err(AppError::TokenExchange(
                r#"HTTP 400 Bad Request: {"message":"Bad Request"}"#.to_string(),
            ));
        }
        Ok("fake_access_token".to_string())
    }

    async fn get_recent_activities(&self, access_token: &str, days: u32) -> Vec<Activity> {
        assert_eq!(access_token, "fake_access_token");
        *self.requested_days.lock().unwrap() = Some(days);
        self.activities.clone()
    }

    async fn mark_activity_as_commute(&self, _access_token: &str, activity_id: u64) -> bool {
        self.record(Call::MarkCommute(activity_id), activity_id)
    }

    async fn hide_activity_from_home(&self, _access_token: &str, activity_id: u64) -> bool {
        self.record(Call::Hide(activity_id), activity_id)
    }
}
