// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model as returned by the athlete activities endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Summary activity record fetched from Strava.
///
/// Read once per run and never mutated locally; flag changes go back
/// through the API. Missing or `null` fields read as empty/zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Activity type (Ride, Walk, Yoga, etc.)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: ActivityType,
    /// Distance in meters
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Device name (e.g. "Garmin Edge 530")
    #[serde(default)]
    pub device_name: Option<String>,
    /// Whether the activity is flagged as a commute
    #[serde(default, deserialize_with = "null_as_default")]
    pub commute: bool,
    /// Whether the activity is hidden from followers' home feeds
    #[serde(default, deserialize_with = "null_as_default")]
    pub hide_from_home: bool,
    /// Start date/time (ISO 8601)
    #[serde(default)]
    pub start_date: Option<String>,
}

impl Activity {
    /// Name for log output.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }

    /// Device name, with a missing device read as empty.
    pub fn device(&self) -> &str {
        self.device_name.as_deref().unwrap_or("")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strava activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityType {
    Ride,
    VirtualRide,
    EBikeRide,
    Run,
    Walk,
    Hike,
    Yoga,
    Workout,
    Swim,
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Ride => "Ride",
            ActivityType::VirtualRide => "VirtualRide",
            ActivityType::EBikeRide => "EBikeRide",
            ActivityType::Run => "Run",
            ActivityType::Walk => "Walk",
            ActivityType::Hike => "Hike",
            ActivityType::Yoga => "Yoga",
            ActivityType::Workout => "Workout",
            ActivityType::Swim => "Swim",
            ActivityType::Other => "Other",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
