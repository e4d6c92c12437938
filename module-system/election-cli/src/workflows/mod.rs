//! Workflows of the `us-election` binary.
use std::path::PathBuf;

use anyhow::Context as _;
use election_modules_api::default_context::DefaultContext;
use election_modules_api::utils::generate_address;
use election_modules_api::ModuleCallJsonSchema;
use us_election::UsElection;

use crate::config::{from_toml_path, ElectionCliConfig};

mod replay;

pub use replay::{load_calls, replay, SignedCall};

#[derive(clap::Subcommand)]
/// Inspect the election module and replay calls against it
pub enum ElectionWorkflow {
    /// Print the address derived from a name
    Address {
        /// Any string, e.g. the name of a participant
        name: String,
    },
    /// Print the JSON schema of the election call messages
    Schema,
    /// Replay a batch of calls against a fresh election and print the final summary
    Replay {
        #[clap(long)]
        /// The path to the election config (toml)
        config: PathBuf,
        #[clap(long)]
        /// The path to the batch of calls (json)
        calls: PathBuf,
    },
}

impl ElectionWorkflow {
    /// Runs the workflow and returns what should be printed.
    pub fn run(self) -> Result<String, anyhow::Error> {
        match self {
            ElectionWorkflow::Address { name } => {
                Ok(generate_address::<DefaultContext>(&name).to_string())
            }
            ElectionWorkflow::Schema => {
                Ok(<UsElection<DefaultContext> as ModuleCallJsonSchema>::json_schema())
            }
            ElectionWorkflow::Replay { config, calls } => {
                let config: ElectionCliConfig = from_toml_path(&config).with_context(|| {
                    format!("Failed to read election config from {}", config.display())
                })?;
                let calls = load_calls(&calls)?;
                let summary = replay(&config, calls)?;
                Ok(serde_json::to_string_pretty(&summary)?)
            }
        }
    }
}
