use crate::application_impl::{CredentialVerifier, resolve_schedule};
use crate::application_port::{AuthError, CredentialHasher, LoginInput, LoginService};
use crate::domain_model::ScheduleView;
use crate::domain_port::{CredentialRepo, VehicleRepo};
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::Arc;
use tracing::{Instrument, debug};
use uuid::Uuid;

/// PHC-string hasher. Salt is generated per hash and rides inside the
/// string, so verification needs nothing beyond the stored hash itself.
pub struct Argon2PasswordHasher;

#[async_trait::async_trait]
impl CredentialHasher for Argon2PasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    async fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::Internal(format!("invalid PHC hash: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Internal(format!("verify error: {e}"))),
        }
    }
}

/// The real login pipeline: validate input, fetch credentials, verify,
/// fetch vehicles, resolve the scoped schedule. One sequential pass per
/// request, no state shared between requests.
pub struct RealLoginService {
    credential_repo: Arc<dyn CredentialRepo>,
    vehicle_repo: Arc<dyn VehicleRepo>,
    verifier: CredentialVerifier,
}

impl RealLoginService {
    pub fn new(
        credential_repo: Arc<dyn CredentialRepo>,
        vehicle_repo: Arc<dyn VehicleRepo>,
        credential_hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        RealLoginService {
            credential_repo,
            vehicle_repo,
            verifier: CredentialVerifier::new(credential_hasher),
        }
    }
}

#[async_trait::async_trait]
impl LoginService for RealLoginService {
    async fn login(&self, request: LoginInput) -> Result<ScheduleView, AuthError> {
        let LoginInput { username, password } = request;

        // Blank input never reaches the store.
        let (username, password) = CredentialVerifier::check_input(&username, &password)?;

        let span = tracing::info_span!("login", attempt_id = %Uuid::new_v4(), username);
        async {
            let candidates = self.credential_repo.fetch_all_credentials().await?;
            debug!(candidates = candidates.len(), "fetched credential rows");

            let principal = self.verifier.verify(username, password, &candidates).await?;

            let vehicles = self.vehicle_repo.fetch_all_vehicles().await?;
            debug!(vehicles = vehicles.len(), "fetched vehicle rows");

            let view = resolve_schedule(&principal.full_name, &vehicles);
            debug!(days = view.len(), "resolved schedule");
            Ok(view)
        }
        .instrument(span)
        .await
    }
}
