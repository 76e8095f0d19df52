//! One-shot aggregation of missions and their rocket names.

use crate::graphql::{ClientError, GraphQlClient, LaunchesData, MissionsData};
use crate::models::MissionRecord;

/// Query for all missions with their static display fields.
const MISSIONS_QUERY: &str = "\
query Missions {
    missions {
        id
        description
        name
        website
    }
}";

/// Query for the launches associated with one mission.
const MISSION_LAUNCHES_QUERY: &str = "\
query MissionLaunches($mission_id: String) {
    launches(find: { mission_id: $mission_id }) {
        rocket {
            rocket_name
        }
    }
}";

/// Fetch all missions and join each with the rocket name of its first launch.
///
/// Missions are processed in upstream order, one launch lookup at a time. A
/// failed or empty lookup leaves `rocket_name` unset for that record and
/// moves on; a failure of the missions query itself aborts the whole pass.
pub async fn aggregate(client: &GraphQlClient) -> Result<Vec<MissionRecord>, ClientError> {
    let data: MissionsData = client.query(MISSIONS_QUERY, serde_json::json!({})).await?;

    let mut records = Vec::with_capacity(data.missions.len());
    for mission in data.missions.into_iter().flatten() {
        let rocket_name = match client
            .query::<LaunchesData>(
                MISSION_LAUNCHES_QUERY,
                serde_json::json!({ "mission_id": mission.id }),
            )
            .await
        {
            Ok(launches) => first_rocket_name(launches),
            Err(e) => {
                tracing::warn!("Launch lookup failed for mission {}: {}", mission.id, e);
                None
            }
        };

        records.push(MissionRecord {
            id: mission.id,
            mission_name: mission.name,
            rocket_name,
            description: mission.description.unwrap_or_default(),
            website: mission.website.unwrap_or_default(),
        });
    }

    tracing::debug!("Aggregated {} mission records", records.len());
    Ok(records)
}

/// Rocket name of the first launch, if any launch carries one.
fn first_rocket_name(data: LaunchesData) -> Option<String> {
    data.launches
        .into_iter()
        .next()
        .and_then(|launch| launch.rocket)
        .and_then(|rocket| rocket.rocket_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rocket_name_takes_the_first_launch() {
        let data: LaunchesData = serde_json::from_value(serde_json::json!({
            "launches": [
                { "rocket": { "rocket_name": "Falcon 9" } },
                { "rocket": { "rocket_name": "Falcon Heavy" } },
            ]
        }))
        .unwrap();

        assert_eq!(first_rocket_name(data), Some("Falcon 9".to_string()));
    }

    #[test]
    fn first_rocket_name_is_none_without_launches() {
        let data: LaunchesData = serde_json::from_value(serde_json::json!({
            "launches": []
        }))
        .unwrap();

        assert_eq!(first_rocket_name(data), None);
    }

    #[test]
    fn first_rocket_name_tolerates_a_launch_without_rocket_data() {
        let data: LaunchesData = serde_json::from_value(serde_json::json!({
            "launches": [ { "rocket": null } ]
        }))
        .unwrap();

        assert_eq!(first_rocket_name(data), None);
    }
}
