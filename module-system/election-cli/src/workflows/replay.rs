use std::fs;
use std::path::Path;

use anyhow::Context as _;
use election_modules_api::default_context::DefaultContext;
use election_modules_api::{Address, Context};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use us_election::{CallMessage, ElectionSummary, ElectionTracker};

use crate::config::ElectionCliConfig;

/// A call message together with the address it is executed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedCall {
    pub sender: Address,
    pub call: CallMessage,
}

/// Loads a JSON array of [`SignedCall`]s.
pub fn load_calls(path: impl AsRef<Path>) -> Result<Vec<SignedCall>, anyhow::Error> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read calls from {}", path.display()))?;
    let calls = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse calls from {}", path.display()))?;
    Ok(calls)
}

/// Opens an election from `config` and executes `calls` in order.
///
/// Rejected calls are logged and skipped. Returns the summary after the last
/// call.
pub fn replay(
    config: &ElectionCliConfig,
    calls: Vec<SignedCall>,
) -> Result<ElectionSummary, anyhow::Error> {
    let tracker = ElectionTracker::<DefaultContext>::with_config(&config.election)?;

    let mut rejected = 0;
    let total = calls.len();
    for (index, SignedCall { sender, call }) in calls.into_iter().enumerate() {
        if let Err(err) = tracker.execute(call, &DefaultContext::new(sender)) {
            warn!(index, %sender, error = %err, "Call rejected");
            rejected += 1;
        }
    }

    let summary = tracker.summary();
    info!(
        calls = total,
        rejected,
        leader = %summary.leader,
        "Replay finished"
    );
    Ok(summary)
}
