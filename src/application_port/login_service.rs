use crate::domain_model::ScheduleView;

/// Failure of an outbound fetch against the external store. Retryable
/// infrastructure trouble, kept distinct from authentication failure.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("store unreachable: {0}")]
    Unreachable(String),
    #[error("fetch timed out")]
    Timeout,
    #[error("malformed top-level data: {0}")]
    Schema(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username or password blank after trimming. The store is never
    /// consulted in this case.
    #[error("username and password are required")]
    MissingInput,
    /// Covers unknown user, wrong password and an empty credential
    /// directory alike, so callers cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Lifecycle of one login request as seen by a caller driving an in-flight
/// indicator. The service itself is stateless per call and never holds this.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RequestState {
    Pending,
    Success,
    Error,
}

#[async_trait::async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, AuthError>;
    async fn verify_password(&self, password: &str, password_hash: &str)
    -> Result<bool, AuthError>;
}

/// Inbound contract: credentials in, the principal's authorization-scoped
/// schedule out. Errors come back as typed results, never as panics.
#[async_trait::async_trait]
pub trait LoginService: Send + Sync {
    async fn login(&self, request: LoginInput) -> Result<ScheduleView, AuthError>;
}
