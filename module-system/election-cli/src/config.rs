use std::fs::File;
use std::io::Read;
use std::path::Path;

use election_modules_api::default_context::DefaultContext;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use us_election::UsElectionConfig;

/// Configuration of a replayed election.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElectionCliConfig {
    /// Genesis configuration of the election module.
    pub election: UsElectionConfig<DefaultContext>,
}

/// Reads toml file as a specific type.
pub fn from_toml_path<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> anyhow::Result<R> {
    let mut contents = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;
    }

    let result: R = toml::from_str(&contents)?;

    Ok(result)
}
