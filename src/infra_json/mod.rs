mod credential_repo_json;
mod directory;
mod vehicle_repo_json;

pub use credential_repo_json::*;
pub use directory::*;
pub use vehicle_repo_json::*;
