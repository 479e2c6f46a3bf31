mod credential_repo;
mod vehicle_repo;

pub use credential_repo::*;
pub use vehicle_repo::*;
