#![deny(missing_docs)]

//! Per-user locations used by `hsnerd`, and the marker file recording
//! that first-run installation has completed.

mod config;
mod error;
mod home;
mod marker;

pub use config::Config;
pub use error::HoustonProblem;
pub use home::{cache_dir, config_dir, home_dir};
pub use marker::Marker;
