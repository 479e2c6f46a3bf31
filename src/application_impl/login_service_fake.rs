use crate::application_impl::CredentialVerifier;
use crate::application_port::{AuthError, LoginInput, LoginService};
use crate::domain_model::{DayKey, ScheduleView, Waypoint};

#[derive(Debug)]
pub struct FakeLoginService;

impl FakeLoginService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FakeLoginService {
    fn default() -> Self {
        Self::new()
    }
}

// Minimal fake for wiring and UI work: any non-blank credentials succeed
// and yield a one-day schedule derived from the username. Extend with
// configurable failures when needed.
#[async_trait::async_trait]
impl LoginService for FakeLoginService {
    async fn login(&self, request: LoginInput) -> Result<ScheduleView, AuthError> {
        let (username, _) = CredentialVerifier::check_input(&request.username, &request.password)?;
        Ok(fake_schedule(username))
    }
}

fn fake_schedule(username: &str) -> ScheduleView {
    let mut view = ScheduleView::new();
    view.insert(
        DayKey::from("Mon"),
        vec![Waypoint {
            name: Some(format!("{username}'s depot")),
            latitude: Some(0.0),
            longitude: Some(0.0),
        }],
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn any_non_blank_credentials_succeed() {
        let service = FakeLoginService::new();
        let view = service
            .login(LoginInput {
                username: "anyone".to_string(),
                password: "anything".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(view.len(), 1);
    }

    #[tokio::test]
    async fn blank_input_is_still_rejected() {
        let service = FakeLoginService::new();
        let err = service
            .login(LoginInput {
                username: "anyone".to_string(),
                password: "".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingInput));
    }
}
