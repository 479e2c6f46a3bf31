use crate::application_port::FetchError;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::RwLock;

/// In-process snapshot of the realtime-database export: one JSON subtree
/// per top-level node (`drivers`, `trucks`). Reads see a consistent clone
/// of a node. Consistency across a reload is per node: a concurrent
/// reader never finds a node missing mid-reload, though two nodes may
/// briefly span snapshot generations.
pub struct JsonDirectory {
    nodes: DashMap<String, Value>,
    loaded_at: RwLock<Option<DateTime<Utc>>>,
}

impl JsonDirectory {
    pub fn new() -> Self {
        JsonDirectory {
            nodes: DashMap::new(),
            loaded_at: RwLock::new(None),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, FetchError> {
        let root: Value =
            serde_json::from_str(raw).map_err(|e| FetchError::Schema(e.to_string()))?;
        let directory = Self::new();
        directory.load_snapshot(root)?;
        Ok(directory)
    }

    /// Replace the whole snapshot. The root must be a JSON object keyed by
    /// node name.
    pub fn load_snapshot(&self, root: Value) -> Result<(), FetchError> {
        let Value::Object(map) = root else {
            return Err(FetchError::Schema(
                "snapshot root is not an object".to_string(),
            ));
        };

        // Update in place, then drop stale nodes. Clearing first would
        // open a window where a reader finds no node at all.
        let fresh: Vec<String> = map.keys().cloned().collect();
        for (name, subtree) in map {
            self.nodes.insert(name, subtree);
        }
        self.nodes.retain(|name, _| fresh.iter().any(|f| f == name));
        if let Ok(mut stamp) = self.loaded_at.write() {
            *stamp = Some(Utc::now());
        }
        Ok(())
    }

    /// Clone of one top-level node, or `None` if the snapshot has no such
    /// node.
    pub fn node(&self, name: &str) -> Option<Value> {
        self.nodes.get(name).map(|entry| entry.value().clone())
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at.read().ok().and_then(|stamp| *stamp)
    }
}

impl Default for JsonDirectory {
    fn default() -> Self {
        Self::new()
    }
}
