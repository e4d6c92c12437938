use election_modules_api::{CallResponse, Context, StateError, StateReader, WorkingSet};
use thiserror::Error;

use crate::types::{Candidate, RegionRecord, RegionResult};
use crate::UsElection;

/// Call actions supported by the module.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    Debug,
    PartialEq,
    Eq,
    Clone,
)]
pub enum CallMessage {
    /// Adds the result of a region to the tallies. Anyone may submit while the
    /// election is open.
    SubmitRegionResult(RegionResult),
    /// Closes the election for good. Must be called by the admin.
    EndElection,
}

/// Reasons a call to the election is refused.
///
/// A refused call never changes the state of the election.
#[derive(Debug, Error)]
pub enum ElectionError {
    #[error("Only admin can end the election")]
    NotAuthorized,
    #[error("The election has ended already")]
    ElectionClosed,
    #[error("The result of region {0} was already submitted")]
    DuplicateRegion(String),
    #[error("There cannot be a tie")]
    Tie,
    #[error("Regions must have at least 1 seat")]
    NoSeats,
    #[error("Seat count overflow")]
    SeatCountOverflow,
    #[error("The election was already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    State(#[from] StateError),
}

impl From<ElectionError> for election_modules_api::Error {
    fn from(err: ElectionError) -> Self {
        election_modules_api::Error::ModuleError(err.into())
    }
}

impl<C: Context> UsElection<C> {
    pub(crate) fn dispatch(
        &self,
        msg: CallMessage,
        context: &C,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<CallResponse, ElectionError> {
        match msg {
            CallMessage::SubmitRegionResult(result) => {
                self.submit_region_result(result, context, working_set)
            }
            CallMessage::EndElection => self.end_election(context, working_set),
        }
    }

    /// Adds the seats of a region to its winner.
    pub(crate) fn submit_region_result(
        &self,
        result: RegionResult,
        context: &C,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<CallResponse, ElectionError> {
        self.exit_if_ended(working_set)?;
        self.exit_if_region_submitted(&result.name, working_set)?;

        let winner = result.winner();
        if winner == Candidate::None {
            return Err(ElectionError::Tie);
        }
        if result.seats == 0 {
            return Err(ElectionError::NoSeats);
        }

        let seats = self
            .seats
            .get(&winner, working_set)
            .unwrap_or_default()
            .checked_add(result.seats)
            .ok_or(ElectionError::SeatCountOverflow)?;

        self.seats.set(&winner, &seats, working_set);
        self.submitted_regions.set(
            &result.name,
            &RegionRecord {
                winner,
                seats: result.seats,
            },
            working_set,
        );

        working_set.add_event(
            "Election: submit_region_result",
            &format!(
                "Region {} won by {winner} with {} seats, submitted by: {}",
                result.name,
                result.seats,
                context.sender()
            ),
        );

        Ok(CallResponse::default())
    }

    /// Ends the election. Must be called by the admin, and only once.
    pub(crate) fn end_election(
        &self,
        context: &C,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<CallResponse, ElectionError> {
        self.exit_if_not_admin(context, working_set)?;
        self.exit_if_ended(working_set)?;

        self.is_ended.set(&true, working_set);
        working_set.add_event("Election: end_election", "Election was ended");

        Ok(CallResponse::default())
    }

    fn exit_if_not_admin<R: StateReader>(
        &self,
        context: &C,
        state: &R,
    ) -> Result<(), ElectionError> {
        let admin = self.admin.get_or_err(state)?;

        if &admin != context.sender() {
            return Err(ElectionError::NotAuthorized);
        }
        Ok(())
    }

    fn exit_if_ended<R: StateReader>(&self, state: &R) -> Result<(), ElectionError> {
        if self.is_ended.get_or_err(state)? {
            return Err(ElectionError::ElectionClosed);
        }
        Ok(())
    }

    fn exit_if_region_submitted<R: StateReader>(
        &self,
        name: &str,
        state: &R,
    ) -> Result<(), ElectionError> {
        if self.submitted_regions.get(name, state).is_some() {
            return Err(ElectionError::DuplicateRegion(name.to_owned()));
        }
        Ok(())
    }
}
