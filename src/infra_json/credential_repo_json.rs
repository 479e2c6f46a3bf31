use crate::application_port::FetchError;
use crate::domain_port::{CredentialRecord, CredentialRepo};
use crate::infra_json::JsonDirectory;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

const DRIVERS_NODE: &str = "drivers";

/// Raw driver row exactly as the export spells it.
#[derive(Debug, Deserialize)]
struct RawDriverRow {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    fullname: Option<String>,
}

pub struct JsonCredentialRepo {
    directory: Arc<JsonDirectory>,
}

impl JsonCredentialRepo {
    pub fn new(directory: Arc<JsonDirectory>) -> Self {
        JsonCredentialRepo { directory }
    }

    fn row_to_record(row: RawDriverRow) -> CredentialRecord {
        CredentialRecord {
            username: row.username,
            password_hash: row.password,
            full_name: row.fullname,
        }
    }
}

#[async_trait::async_trait]
impl CredentialRepo for JsonCredentialRepo {
    async fn fetch_all_credentials(&self) -> Result<Vec<CredentialRecord>, FetchError> {
        let Some(node) = self.directory.node(DRIVERS_NODE) else {
            // An absent node is an empty directory, not a failure.
            return Ok(Vec::new());
        };
        let Value::Object(children) = node else {
            return Err(FetchError::Schema(format!(
                "`{DRIVERS_NODE}` node is not an object"
            )));
        };

        let mut records = Vec::with_capacity(children.len());
        for (key, child) in children {
            match serde_json::from_value::<RawDriverRow>(child) {
                Ok(row) => records.push(Self::row_to_record(row)),
                Err(e) => warn!(key = %key, "skipping malformed driver row: {e}"),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo(root: Value) -> JsonCredentialRepo {
        let directory = JsonDirectory::new();
        directory.load_snapshot(root).unwrap();
        JsonCredentialRepo::new(Arc::new(directory))
    }

    #[tokio::test]
    async fn rows_map_to_records_with_export_spelling() {
        let repo = repo(json!({
            "drivers": {
                "k1": {"username": "d1", "password": "$argon2id$stub", "fullname": "Juan Dela Cruz"}
            }
        }));

        let records = repo.fetch_all_credentials().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username.as_deref(), Some("d1"));
        assert_eq!(records[0].password_hash.as_deref(), Some("$argon2id$stub"));
        assert_eq!(records[0].full_name.as_deref(), Some("Juan Dela Cruz"));
    }

    #[tokio::test]
    async fn missing_attributes_pass_through_as_none() {
        let repo = repo(json!({
            "drivers": {
                "k1": {"username": "d1"}
            }
        }));

        let records = repo.fetch_all_credentials().await.unwrap();
        assert_eq!(records[0].username.as_deref(), Some("d1"));
        assert!(records[0].password_hash.is_none());
        assert!(records[0].full_name.is_none());
    }

    #[tokio::test]
    async fn non_object_rows_are_skipped_without_failing() {
        let repo = repo(json!({
            "drivers": {
                "bad": "just a string",
                "good": {"username": "d1", "password": "h", "fullname": "Juan"}
            }
        }));

        let records = repo.fetch_all_credentials().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username.as_deref(), Some("d1"));
    }

    #[tokio::test]
    async fn absent_drivers_node_is_an_empty_directory() {
        let repo = repo(json!({"trucks": {}}));
        let records = repo.fetch_all_credentials().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn non_object_drivers_node_is_a_schema_error() {
        let repo = repo(json!({"drivers": [1, 2, 3]}));
        let err = repo.fetch_all_credentials().await.unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
    }
}
