use core::cmp::Ordering;
use core::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// A candidate of the election.
///
/// `None` is the answer to "who leads?" while seats are tied. It never wins a
/// region and never holds seats.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    BorshDeserialize,
    BorshSerialize,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
pub enum Candidate {
    #[default]
    None,
    CandidateA,
    CandidateB,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::None => write!(f, "nobody"),
            Candidate::CandidateA => write!(f, "candidate A"),
            Candidate::CandidateB => write!(f, "candidate B"),
        }
    }
}

/// The aggregated result of one region, as submitted by a caller.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    BorshDeserialize,
    BorshSerialize,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
pub struct RegionResult {
    /// Name of the region, unique for the lifetime of the election.
    pub name: String,
    /// Popular votes of candidate A.
    pub votes_a: u64,
    /// Popular votes of candidate B.
    pub votes_b: u64,
    /// Seats the region gives to its winner.
    pub seats: u64,
}

impl RegionResult {
    pub fn new(name: impl Into<String>, votes_a: u64, votes_b: u64, seats: u64) -> Self {
        Self {
            name: name.into(),
            votes_a,
            votes_b,
            seats,
        }
    }

    /// The candidate with more popular votes, [`Candidate::None`] on a tie.
    pub fn winner(&self) -> Candidate {
        match self.votes_a.cmp(&self.votes_b) {
            Ordering::Greater => Candidate::CandidateA,
            Ordering::Less => Candidate::CandidateB,
            Ordering::Equal => Candidate::None,
        }
    }
}

/// What the election recorded for an accepted region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshDeserialize, BorshSerialize, Serialize, Deserialize,
)]
pub struct RegionRecord {
    pub winner: Candidate,
    pub seats: u64,
}
