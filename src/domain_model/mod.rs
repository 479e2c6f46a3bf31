mod principal;
mod schedule;

pub use principal::*;
pub use schedule::*;
