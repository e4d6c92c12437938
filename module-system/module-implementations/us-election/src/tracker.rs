use election_modules_api::{Context, Event, InMemoryStorage, StateError};
use tracing::{debug, info};

use crate::call::{CallMessage, ElectionError};
use crate::query::ElectionSummary;
use crate::types::{Candidate, RegionRecord, RegionResult};
use crate::{UsElection, UsElectionConfig};

/// Hosts a [`UsElection`] for the lifetime of one election.
///
/// Every mutation runs against its own working set, which holds the storage
/// write lock from the first read to the commit. Mutations are therefore
/// serialized and either fully applied or not applied at all. Reads take a
/// snapshot and see the state before or after any given mutation, never in
/// between. The tracker can be shared between threads behind an `Arc`.
pub struct ElectionTracker<C: Context> {
    election: UsElection<C>,
    storage: InMemoryStorage,
}

impl<C: Context> ElectionTracker<C> {
    /// Opens a new election whose only admin is `admin`.
    pub fn new(admin: C::Address) -> Result<Self, ElectionError> {
        Self::with_config(&UsElectionConfig { admin })
    }

    pub fn with_config(config: &UsElectionConfig<C>) -> Result<Self, ElectionError> {
        let election = UsElection::default();
        let storage = InMemoryStorage::new();

        {
            let mut working_set = storage.working_set();
            if let Err(err) = election.init_module(config, &mut working_set) {
                working_set.revert();
                return Err(err);
            }
            working_set.checkpoint();
        }

        info!(admin = %config.admin, module = %election.address, "Election opened");
        Ok(Self { election, storage })
    }

    /// Executes `message` on behalf of `context.sender()` and returns the
    /// events it emitted.
    pub fn execute(&self, message: CallMessage, context: &C) -> Result<Vec<Event>, ElectionError> {
        debug!(?message, sender = %context.sender(), "Executing call");

        let mut working_set = self.storage.working_set();
        match self.election.dispatch(message, context, &mut working_set) {
            Ok(_) => {
                let events = working_set.checkpoint();
                for event in &events {
                    info!(key = event.key(), value = event.value(), "Election event");
                }
                Ok(events)
            }
            Err(err) => {
                working_set.revert();
                debug!(sender = %context.sender(), error = %err, "Call rejected");
                Err(err)
            }
        }
    }

    /// Adds the seats of `result` to its winner. Anyone may submit while the
    /// election is open.
    pub fn submit_region_result(
        &self,
        context: &C,
        result: RegionResult,
    ) -> Result<(), ElectionError> {
        self.execute(CallMessage::SubmitRegionResult(result), context)
            .map(drop)
    }

    /// Ends the election. Only the admin may call this, and only once.
    pub fn close(&self, context: &C) -> Result<(), ElectionError> {
        self.execute(CallMessage::EndElection, context).map(drop)
    }

    pub fn current_leader(&self) -> Candidate {
        self.election.current_leader(&self.storage.snapshot())
    }

    pub fn is_ended(&self) -> bool {
        self.election.is_ended(&self.storage.snapshot())
    }

    pub fn seats_for(&self, candidate: Candidate) -> u64 {
        self.election.seats_for(candidate, &self.storage.snapshot())
    }

    pub fn was_region_submitted(&self, name: &str) -> bool {
        self.election
            .was_region_submitted(name, &self.storage.snapshot())
    }

    pub fn region_result(&self, name: &str) -> Option<RegionRecord> {
        self.election.region_result(name, &self.storage.snapshot())
    }

    pub fn admin(&self) -> Result<C::Address, StateError> {
        self.election.admin(&self.storage.snapshot())
    }

    /// Leader, tallies and status read from a single snapshot.
    pub fn summary(&self) -> ElectionSummary {
        self.election.summary(&self.storage.snapshot())
    }
}
