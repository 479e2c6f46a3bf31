use crate::application_port::{AuthError, CredentialHasher};
use crate::domain_model::Principal;
use crate::domain_port::CredentialRecord;
use std::sync::Arc;
use tracing::debug;

/// Scans candidate credential rows for the single matching principal.
///
/// Pure with respect to its inputs: no state survives a call and nothing
/// is written anywhere. The plaintext password is never logged.
pub struct CredentialVerifier {
    hasher: Arc<dyn CredentialHasher>,
}

impl CredentialVerifier {
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        CredentialVerifier { hasher }
    }

    /// Trim both inputs, rejecting blank ones. Callers run this before any
    /// fetch so a blank form never touches the store.
    pub fn check_input<'a>(
        username: &'a str,
        password: &'a str,
    ) -> Result<(&'a str, &'a str), AuthError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingInput);
        }
        Ok((username, password))
    }

    /// First-match-wins scan in supplied order. Rows missing `username` or
    /// `password_hash` are malformed and skipped, never fatal. Username
    /// comparison is exact and case-sensitive; the password is checked
    /// against the stored PHC hash.
    pub async fn verify(
        &self,
        username: &str,
        password: &str,
        candidates: &[CredentialRecord],
    ) -> Result<Principal, AuthError> {
        let (username, password) = Self::check_input(username, password)?;

        for record in candidates {
            let (Some(candidate), Some(hash)) =
                (record.username.as_deref(), record.password_hash.as_deref())
            else {
                continue;
            };
            if candidate != username {
                continue;
            }
            match self.hasher.verify_password(password, hash).await {
                Ok(true) => {}
                Ok(false) => continue,
                // A malformed stored hash disqualifies this row only.
                Err(e) => {
                    debug!(username, "skipping row with unverifiable hash: {e}");
                    continue;
                }
            }
            match record.full_name.as_deref() {
                Some(full_name) => {
                    return Ok(Principal {
                        full_name: full_name.to_string(),
                    });
                }
                // Matching row without a display name cannot become a
                // principal; treat it like any other malformed row.
                None => continue,
            }
        }

        // Same error for unknown user, wrong password and empty directory.
        Err(AuthError::InvalidCredentials)
    }
}
