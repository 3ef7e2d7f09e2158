//! Configuration loading for the attendance engine.
//!
//! Configuration lives in a directory containing an `engine.yaml` file with
//! organisation metadata and the standard shift policy.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/joygardens").unwrap();
//! println!("Loaded organisation: {}", config.organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, OrganisationMetadata, ShiftPolicy};
