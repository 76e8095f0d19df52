//! Wire types for the upstream queries.
//!
//! These mirror the upstream response schemas and stay separate from the
//! domain model; only the aggregator sees them.

use serde::Deserialize;

/// `data` payload of the all-missions query.
#[derive(Debug, Deserialize)]
pub struct MissionsData {
    /// The upstream list can contain null entries; they are skipped.
    pub missions: Vec<Option<MissionSummary>>,
}

/// One mission as returned by the all-missions query.
#[derive(Debug, Deserialize)]
pub struct MissionSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// `data` payload of the per-mission launches query.
#[derive(Debug, Deserialize)]
pub struct LaunchesData {
    #[serde(default)]
    pub launches: Vec<LaunchSummary>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchSummary {
    pub rocket: Option<LaunchRocket>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchRocket {
    pub rocket_name: Option<String>,
}
