use election_modules_api::{Context, StateError, StateReader};
use serde::{Deserialize, Serialize};

use crate::types::{Candidate, RegionRecord};
use crate::UsElection;

/// Everything there is to know about the tallies at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub leader: Candidate,
    pub seats_a: u64,
    pub seats_b: u64,
    pub is_ended: bool,
}

impl<C: Context> UsElection<C> {
    /// The candidate with strictly more seats, [`Candidate::None`] while tied.
    pub fn current_leader<R: StateReader>(&self, state: &R) -> Candidate {
        leader_of(
            self.seats_for(Candidate::CandidateA, state),
            self.seats_for(Candidate::CandidateB, state),
        )
    }

    /// Seats won so far by `candidate`. [`Candidate::None`] never holds seats.
    pub fn seats_for<R: StateReader>(&self, candidate: Candidate, state: &R) -> u64 {
        match candidate {
            Candidate::None => 0,
            candidate => self.seats.get(&candidate, state).unwrap_or_default(),
        }
    }

    pub fn is_ended<R: StateReader>(&self, state: &R) -> bool {
        self.is_ended.get(state).unwrap_or_default()
    }

    pub fn was_region_submitted<R: StateReader>(&self, name: &str, state: &R) -> bool {
        self.submitted_regions.get(name, state).is_some()
    }

    /// What was recorded for `name`, if its result was accepted.
    pub fn region_result<R: StateReader>(&self, name: &str, state: &R) -> Option<RegionRecord> {
        self.submitted_regions.get(name, state)
    }

    /// The only address allowed to end the election.
    pub fn admin<R: StateReader>(&self, state: &R) -> Result<C::Address, StateError> {
        self.admin.get_or_err(state)
    }

    pub fn summary<R: StateReader>(&self, state: &R) -> ElectionSummary {
        let seats_a = self.seats_for(Candidate::CandidateA, state);
        let seats_b = self.seats_for(Candidate::CandidateB, state);

        ElectionSummary {
            leader: leader_of(seats_a, seats_b),
            seats_a,
            seats_b,
            is_ended: self.is_ended(state),
        }
    }
}

fn leader_of(seats_a: u64, seats_b: u64) -> Candidate {
    match seats_a.cmp(&seats_b) {
        core::cmp::Ordering::Greater => Candidate::CandidateA,
        core::cmp::Ordering::Less => Candidate::CandidateB,
        core::cmp::Ordering::Equal => Candidate::None,
    }
}
