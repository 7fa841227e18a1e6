// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity sorting workflow.
//!
//! Handles one run:
//! 1. Exchange the refresh token for an access token
//! 2. Fetch activities within the look-back window
//! 3. Classify each activity
//! 4. Mark commutes and hide commutes, walks and yoga from the home feed
//!
//! Only a failed token exchange aborts the run. Update failures are logged
//! and counted, and processing moves on to the next activity.

use crate::error::Result;
use crate::models::Activity;
use crate::services::classifier::{classify, Classification};
use crate::services::platform::ActivityPlatform;

/// Default look-back window in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 1;

/// Classify recent activities and push the resulting flag updates.
pub struct ActivitySorter<P> {
    platform: P,
}

impl<P: ActivityPlatform> ActivitySorter<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Process activities from the last `days` days.
    pub async fn run(&self, days: u32) -> Result<RunSummary> {
        let access_token = self.platform.get_access_token().await?;
        let activities = self
            .platform
            .get_recent_activities(&access_token, days)
            .await;

        tracing::info!(count = activities.len(), days, "Fetched recent activities");

        let mut summary = RunSummary::default();
        for activity in &activities {
            let outcome = self.process_activity(&access_token, activity).await;
            summary.record(outcome);
        }

        tracing::info!(
            fetched = summary.fetched,
            commutes = summary.commutes,
            hidden = summary.hidden,
            skipped = summary.skipped,
            ignored = summary.ignored,
            failed_updates = summary.failed_updates,
            "Run complete"
        );

        Ok(summary)
    }

    /// Classify one activity and apply its updates.
    pub async fn process_activity(
        &self,
        access_token: &str,
        activity: &Activity,
    ) -> ActivityOutcome {
        let classification = classify(activity);

        tracing::info!(
            activity_id = activity.id,
            name = activity.display_name(),
            activity_type = %activity.activity_type,
            %classification,
            "Processing activity"
        );

        let mut outcome = ActivityOutcome {
            activity_id: activity.id,
            classification,
            commute_marked: None,
            hidden: None,
        };

        match classification {
            Classification::Skip => {
                tracing::info!(activity_id = activity.id, "Skipped MyWhoosh activity");
            }
            Classification::Ignore => {}
            Classification::Commute | Classification::Hide => {
                // Both calls are attempted even if the first one fails.
                if classification.marks_commute() {
                    outcome.commute_marked = Some(
                        self.platform
                            .mark_activity_as_commute(access_token, activity.id)
                            .await,
                    );
                }
                if classification.hides() {
                    outcome.hidden = Some(
                        self.platform
                            .hide_activity_from_home(access_token, activity.id)
                            .await,
                    );
                }

                if outcome.failed_updates() > 0 {
                    tracing::warn!(
                        activity_id = activity.id,
                        commute_marked = ?outcome.commute_marked,
                        hidden = ?outcome.hidden,
                        "Some updates failed, continuing"
                    );
                }
            }
        }

        outcome
    }
}

/// What happened to a single activity.
///
/// `None` means the update was not attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub activity_id: u64,
    pub classification: Classification,
    pub commute_marked: Option<bool>,
    pub hidden: Option<bool>,
}

impl ActivityOutcome {
    pub fn failed_updates(&self) -> usize {
        [self.commute_marked, self.hidden]
            .iter()
            .filter(|r| **r == Some(false))
            .count()
    }
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub commutes: usize,
    pub hidden: usize,
    pub ignored: usize,
    pub failed_updates: usize,
    pub outcomes: Vec<ActivityOutcome>,
}

impl RunSummary {
    fn record(&mut self, outcome: ActivityOutcome) {
        self.fetched += 1;
        match outcome.classification {
            Classification::Skip => self.skipped += 1,
            Classification::Commute => self.commutes += 1,
            Classification::Hide => {}
            Classification::Ignore => self.ignored += 1,
        }
        if outcome.hidden == Some(true) {
            self.hidden += 1;
        }
        self.failed_updates += outcome.failed_updates();
        self.outcomes.push(outcome);
    }
}
