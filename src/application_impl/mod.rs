mod credential_verifier;
mod login_service_fake;
mod login_service_impl;
mod schedule_resolver;

pub use credential_verifier::*;
pub use login_service_fake::*;
pub use login_service_impl::*;
pub use schedule_resolver::*;
