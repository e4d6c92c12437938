//! Tracks per-region results of a two-candidate election.
//!
//! Each accepted [`RegionResult`] gives all of its seats to the candidate with
//! more popular votes in that region. The leader is whoever holds strictly
//! more seats. The admin recorded at genesis is the only address that can end
//! the election, after which no more results are accepted.
//!
//! [`UsElection`] is the module itself; [`ElectionTracker`] hosts it on an
//! [`InMemoryStorage`](election_modules_api::InMemoryStorage) and serializes
//! calls against it.

mod call;
mod genesis;
mod query;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use call::{CallMessage, ElectionError};
use election_modules_api::utils::generate_address;
use election_modules_api::{
    CallResponse, Context, Error, Module, ModuleCallJsonSchema, ModuleInfo, Prefix, StateMap,
    StateValue, WorkingSet,
};
pub use query::ElectionSummary;
use serde::{Deserialize, Serialize};
pub use tracker::ElectionTracker;
pub use types::{Candidate, RegionRecord, RegionResult};

const MODULE_PATH: &str = module_path!();
const MODULE_NAME: &str = "UsElection";

/// Initial configuration for the election module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UsElectionConfig<C: Context> {
    /// The only address allowed to end the election.
    pub admin: C::Address,
}

/// The election module.
pub struct UsElection<C: Context> {
    /// Address of the module.
    pub address: C::Address,

    pub(crate) admin: StateValue<C::Address>,

    pub(crate) is_ended: StateValue<bool>,

    /// Cumulative seats of `CandidateA` and `CandidateB`.
    pub(crate) seats: StateMap<Candidate, u64>,

    /// Accepted regions by name.
    pub(crate) submitted_regions: StateMap<String, RegionRecord>,
}

impl<C: Context> Default for UsElection<C> {
    fn default() -> Self {
        let storage = |name: &str| Prefix::new_storage(MODULE_PATH, MODULE_NAME, name);

        Self {
            address: generate_address::<C>(
                &Prefix::new_module(MODULE_PATH, MODULE_NAME).to_string(),
            ),
            admin: StateValue::new(storage("admin")),
            is_ended: StateValue::new(storage("is_ended")),
            seats: StateMap::new(storage("seats")),
            submitted_regions: StateMap::new(storage("submitted_regions")),
        }
    }
}

impl<C: Context> Module for UsElection<C> {
    type Context = C;

    type Config = UsElectionConfig<C>;

    type CallMessage = CallMessage;

    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<(), Error> {
        Ok(self.init_module(config, working_set)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<CallResponse, Error> {
        Ok(self.dispatch(msg, context, working_set)?)
    }
}

impl<C: Context> ModuleInfo for UsElection<C> {
    type Context = C;

    fn address(&self) -> &C::Address {
        &self.address
    }

    fn prefix(&self) -> Prefix {
        Prefix::new_module(MODULE_PATH, MODULE_NAME)
    }
}

impl<C: Context> ModuleCallJsonSchema for UsElection<C> {
    fn json_schema() -> String {
        let schema = schemars::schema_for!(CallMessage);
        serde_json::to_string_pretty(&schema)
            .expect("Failed to serialize JSON schema; this is a bug in the module")
    }
}
