use crate::application_port::FetchError;
use crate::domain_model::{DayKey, Waypoint};
use crate::domain_port::{VehicleRecord, VehicleRepo};
use crate::infra_json::JsonDirectory;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

const TRUCKS_NODE: &str = "trucks";

/// Raw truck row exactly as the export spells it.
#[derive(Debug, Deserialize)]
struct RawTruckRow {
    #[serde(default, rename = "vehicleDriver")]
    vehicle_driver: Option<String>,
    #[serde(default)]
    schedules: Option<HashMap<String, RawDaySchedule>>,
}

#[derive(Debug, Deserialize)]
struct RawDaySchedule {
    #[serde(default)]
    places: Option<Vec<RawPlace>>,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

pub struct JsonVehicleRepo {
    directory: Arc<JsonDirectory>,
}

impl JsonVehicleRepo {
    pub fn new(directory: Arc<JsonDirectory>) -> Self {
        JsonVehicleRepo { directory }
    }

    fn row_to_record(row: RawTruckRow) -> VehicleRecord {
        let mut schedule = HashMap::new();
        for (day, entry) in row.schedules.unwrap_or_default() {
            let waypoints = entry
                .places
                .unwrap_or_default()
                .into_iter()
                .map(|place| Waypoint {
                    name: place.name,
                    latitude: place.latitude,
                    longitude: place.longitude,
                })
                .collect();
            schedule.insert(DayKey(day), waypoints);
        }
        VehicleRecord {
            assigned_driver: row.vehicle_driver,
            schedule,
        }
    }
}

#[async_trait::async_trait]
impl VehicleRepo for JsonVehicleRepo {
    async fn fetch_all_vehicles(&self) -> Result<Vec<VehicleRecord>, FetchError> {
        let Some(node) = self.directory.node(TRUCKS_NODE) else {
            // No trucks registered yet.
            return Ok(Vec::new());
        };
        let Value::Object(children) = node else {
            return Err(FetchError::Schema(format!(
                "`{TRUCKS_NODE}` node is not an object"
            )));
        };

        let mut records = Vec::with_capacity(children.len());
        for (key, child) in children {
            match serde_json::from_value::<RawTruckRow>(child) {
                Ok(row) => records.push(Self::row_to_record(row)),
                Err(e) => warn!(key = %key, "skipping malformed truck row: {e}"),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo(root: Value) -> JsonVehicleRepo {
        let directory = JsonDirectory::new();
        directory.load_snapshot(root).unwrap();
        JsonVehicleRepo::new(Arc::new(directory))
    }

    #[tokio::test]
    async fn rows_map_to_typed_schedules() {
        let repo = repo(json!({
            "trucks": {
                "t1": {
                    "vehicleDriver": "Juan Dela Cruz",
                    "schedules": {
                        "Mon": {"places": [
                            {"name": "Depot", "latitude": 14.6, "longitude": 121.0}
                        ]}
                    }
                }
            }
        }));

        let records = repo.fetch_all_vehicles().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].assigned_driver.as_deref(), Some("Juan Dela Cruz"));
        let mon = &records[0].schedule[&DayKey::from("Mon")];
        assert_eq!(mon[0].name.as_deref(), Some("Depot"));
        assert_eq!(mon[0].latitude, Some(14.6));
        assert_eq!(mon[0].longitude, Some(121.0));
    }

    #[tokio::test]
    async fn partial_places_pass_through_best_effort() {
        let repo = repo(json!({
            "trucks": {
                "t1": {
                    "vehicleDriver": "X",
                    "schedules": {"Tue": {"places": [{"latitude": 1.5}]}}
                }
            }
        }));

        let records = repo.fetch_all_vehicles().await.unwrap();
        let tue = &records[0].schedule[&DayKey::from("Tue")];
        assert_eq!(tue.len(), 1);
        assert!(tue[0].name.is_none());
        assert_eq!(tue[0].latitude, Some(1.5));
        assert!(tue[0].longitude.is_none());
    }

    #[tokio::test]
    async fn missing_schedules_yield_an_empty_map() {
        let repo = repo(json!({
            "trucks": {"t1": {"vehicleDriver": "X"}}
        }));

        let records = repo.fetch_all_vehicles().await.unwrap();
        assert!(records[0].schedule.is_empty());
    }

    #[tokio::test]
    async fn day_without_places_maps_to_an_empty_list() {
        let repo = repo(json!({
            "trucks": {
                "t1": {"vehicleDriver": "X", "schedules": {"Mon": {}}}
            }
        }));

        let records = repo.fetch_all_vehicles().await.unwrap();
        assert_eq!(records[0].schedule[&DayKey::from("Mon")], Vec::<Waypoint>::new());
    }

    #[tokio::test]
    async fn absent_trucks_node_is_an_empty_fleet() {
        let repo = repo(json!({"drivers": {}}));
        let records = repo.fetch_all_vehicles().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn non_object_trucks_node_is_a_schema_error() {
        let repo = repo(json!({"trucks": 7}));
        let err = repo.fetch_all_vehicles().await.unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }
}
