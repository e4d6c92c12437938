//! Drives a local [`us_election::ElectionTracker`] from the command line.

mod config;
pub mod workflows;

pub use clap;
pub use config::{from_toml_path, ElectionCliConfig};
pub use workflows::{load_calls, replay, ElectionWorkflow, SignedCall};
