// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity classification rules.
//!
//! Pure predicates over an [`Activity`]; no I/O.

use crate::models::{Activity, ActivityType};
use std::fmt;

/// Rides longer than this (meters) are never commutes.
pub const COMMUTE_MAX_DISTANCE_METERS: f64 = 10_000.0;

/// Device name substring (lowercase) accepted for commute rides.
const TRUSTED_DEVICE: &str = "garmin";

/// Name prefix that MyWhoosh gives uploaded virtual rides.
const VIRTUAL_RIDE_PREFIX: &str = "MyWhoosh";

/// Lowercase marker for activities skipped entirely.
const SKIP_MARKER: &str = "mywhoosh";

/// True if the activity looks like a short utility ride.
///
/// Requires a Ride of at most 10 km, recorded on a Garmin (or with no
/// device at all), whose name does not start with "MyWhoosh".
pub fn is_commute(activity: &Activity) -> bool {
    if activity.activity_type != ActivityType::Ride {
        return false;
    }

    if activity.distance > COMMUTE_MAX_DISTANCE_METERS {
        return false;
    }

    let device = activity.device().to_lowercase();
    if !device.is_empty() && !device.contains(TRUSTED_DEVICE) {
        return false;
    }

    !activity.name.starts_with(VIRTUAL_RIDE_PREFIX)
}

pub fn is_walking(activity: &Activity) -> bool {
    activity.activity_type == ActivityType::Walk
}

pub fn is_yoga(activity: &Activity) -> bool {
    activity.activity_type == ActivityType::Yoga
}

/// True if the activity name mentions MyWhoosh anywhere, in any case.
pub fn is_mywhoosh(activity: &Activity) -> bool {
    activity.name.to_lowercase().contains(SKIP_MARKER)
}

/// Outcome of running an activity through the rules in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// MyWhoosh activity; left untouched.
    Skip,
    /// Mark as commute and hide from the home feed.
    Commute,
    /// Walk or yoga; hide from the home feed only.
    Hide,
    /// No rule matched.
    Ignore,
}

impl Classification {
    /// Whether the activity should be flagged as a commute.
    pub fn marks_commute(self) -> bool {
        matches!(self, Classification::Commute)
    }

    /// Whether the activity should be hidden from the home feed.
    pub fn hides(self) -> bool {
        matches!(self, Classification::Commute | Classification::Hide)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Skip => "skip",
            Classification::Commute => "commute",
            Classification::Hide => "hide",
            Classification::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an activity. The skip check wins over everything, then the
/// commute rule, then walk/yoga.
pub fn classify(activity: &Activity) -> Classification {
    if is_mywhoosh(activity) {
        Classification::Skip
    } else if is_commute(activity) {
        Classification::Commute
    } else if is_walking(activity) || is_yoga(activity) {
        Classification::Hide
    } else {
        Classification::Ignore
    }
}
