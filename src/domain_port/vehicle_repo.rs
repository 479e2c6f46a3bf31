use crate::application_port::FetchError;
use crate::domain_model::{DayKey, Waypoint};
use std::collections::HashMap;

/// One vehicle row: which driver it is assigned to, and its per-day
/// waypoint schedule.
#[derive(Debug, Clone, Default)]
pub struct VehicleRecord {
    pub assigned_driver: Option<String>,
    pub schedule: HashMap<DayKey, Vec<Waypoint>>,
}

#[async_trait::async_trait]
pub trait VehicleRepo: Send + Sync {
    /// Fetch every vehicle row. An empty vec is a legitimate result,
    /// distinct from failure.
    async fn fetch_all_vehicles(&self) -> Result<Vec<VehicleRecord>, FetchError>;
}
