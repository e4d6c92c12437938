use election_modules_api::{Context, Module, WorkingSet};

use crate::call::ElectionError;
use crate::types::Candidate;
use crate::UsElection;

impl<C: Context> UsElection<C> {
    /// Opens the election: records the admin and zeroes both tallies.
    pub(crate) fn init_module(
        &self,
        config: &<Self as Module>::Config,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<(), ElectionError> {
        if self.admin.get(working_set).is_some() {
            return Err(ElectionError::AlreadyInitialized);
        }

        self.admin.set(&config.admin, working_set);
        self.is_ended.set(&false, working_set);
        for candidate in [Candidate::CandidateA, Candidate::CandidateB] {
            self.seats.set(&candidate, &0, working_set);
        }

        Ok(())
    }
}
