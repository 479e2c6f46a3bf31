use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Application-defined label identifying a schedule slot (e.g. a weekday
/// name). Not constrained beyond being a non-structured string.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(pub String);

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DayKey {
    fn from(s: &str) -> Self {
        DayKey(s.to_string())
    }
}

/// A named geographic point. Fields are optional because upstream rows are
/// loosely typed; whatever is present passes through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The authorization-filtered per-day waypoint listing returned to an
/// authenticated principal. Each day key maps to the waypoints of the
/// last-scanned vehicle that supplied that day.
pub type ScheduleView = HashMap<DayKey, Vec<Waypoint>>;
