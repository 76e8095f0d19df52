use serde::{Deserialize, Serialize};

/// The flattened, UI-facing record for one mission.
///
/// Combines a mission's static fields with the rocket name of its first
/// associated launch. `rocket_name` is best-effort: a mission with no launch
/// data keeps `None` rather than failing aggregation.
///
/// Records are created once per aggregation pass and never mutated afterwards;
/// the filter view only ever derives new lists from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRecord {
    pub id: String,
    pub mission_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_name: Option<String>,
    pub description: String,
    pub website: String,
}
