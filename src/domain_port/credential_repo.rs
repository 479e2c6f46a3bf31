use crate::application_port::FetchError;

/// One row of the external driver directory, owned and mutated by the
/// driver-management subsystem. Attributes may be absent in the store;
/// rows arrive as-is and get filtered during the verification scan.
#[derive(Debug, Clone, Default)]
pub struct CredentialRecord {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub full_name: Option<String>,
}

#[async_trait::async_trait]
pub trait CredentialRepo: Send + Sync {
    /// Fetch every credential row. The store is not indexed by username,
    /// so the scan happens on our side. An empty vec is a legitimate
    /// result, distinct from failure.
    async fn fetch_all_credentials(&self) -> Result<Vec<CredentialRecord>, FetchError>;
}
