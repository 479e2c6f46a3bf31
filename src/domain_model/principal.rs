/// The authenticated identity resulting from a successful login.
///
/// Created transiently per login attempt and handed to the schedule
/// resolver; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub full_name: String,
}
