use election_modules_api::default_context::DefaultContext;
use election_modules_api::utils::generate_address;
use election_modules_api::{
    Address, Context, Event, InMemoryStorage, Module, ModuleCallJsonSchema, ModuleInfo,
};

use super::call::{CallMessage, ElectionError};
use super::types::{Candidate, RegionRecord, RegionResult};
use super::UsElection;
use crate::UsElectionConfig;

type C = DefaultContext;

fn election_error(err: election_modules_api::Error) -> ElectionError {
    let election_modules_api::Error::ModuleError(err) = err;
    err.downcast::<ElectionError>()
        .expect("the module only returns election errors")
}

#[test]
fn test_election() {
    let admin = Address::from([1; 32]);
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();

    let admin_context = C::new(admin);
    let election = UsElection::<C>::default();

    // Init module
    {
        let config = UsElectionConfig { admin };
        election.genesis(&config, &mut working_set).unwrap();
        assert_eq!(election.current_leader(&working_set), Candidate::None);
        assert!(!election.is_ended(&working_set));
    }

    // Submit results
    {
        let california =
            CallMessage::SubmitRegionResult(RegionResult::new("California", 1000, 900, 32));
        election
            .call(california, &admin_context, &mut working_set)
            .unwrap();
        assert_eq!(election.current_leader(&working_set), Candidate::CandidateA);

        let voter_context = C::new(generate_address::<C>("voter"));
        let ohio = CallMessage::SubmitRegionResult(RegionResult::new("Ohio", 800, 1200, 33));
        election
            .call(ohio, &voter_context, &mut working_set)
            .unwrap();
        assert_eq!(election.current_leader(&working_set), Candidate::CandidateB);
    }

    election
        .call(CallMessage::EndElection, &admin_context, &mut working_set)
        .unwrap();

    // Get result
    {
        assert!(election.is_ended(&working_set));
        assert_eq!(election.current_leader(&working_set), Candidate::CandidateB);
        assert_eq!(election.seats_for(Candidate::CandidateA, &working_set), 32);
        assert_eq!(election.seats_for(Candidate::CandidateB, &working_set), 33);
        assert_eq!(election.seats_for(Candidate::None, &working_set), 0);
        assert_eq!(
            election.region_result("Ohio", &working_set),
            Some(RegionRecord {
                winner: Candidate::CandidateB,
                seats: 33
            })
        );

        let events = working_set.checkpoint();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[2],
            Event::new("Election: end_election", "Election was ended")
        );
        assert_eq!(events[0].key(), "Election: submit_region_result");
        assert!(events[0]
            .value()
            .starts_with("Region California won by candidate A with 32 seats"));
    }
}

#[test]
fn test_err_on_sender_is_not_admin() {
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();
    let election = UsElection::<C>::default();

    let config = UsElectionConfig {
        admin: Address::from([1; 32]),
    };
    election.genesis(&config, &mut working_set).unwrap();

    let sender_context = C::new(Address::from([2; 32]));
    let err = election
        .call(CallMessage::EndElection, &sender_context, &mut working_set)
        .unwrap_err();

    assert!(matches!(election_error(err), ElectionError::NotAuthorized));
    assert!(!election.is_ended(&working_set));
    assert!(working_set.events().is_empty());
}

#[test]
fn test_validation_order() {
    let admin = Address::from([1; 32]);
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();
    let election = UsElection::<C>::default();
    let context = C::new(admin);
    election
        .genesis(&UsElectionConfig { admin }, &mut working_set)
        .unwrap();

    let mut submit = |result: RegionResult| {
        election
            .call(
                CallMessage::SubmitRegionResult(result),
                &context,
                &mut working_set,
            )
            .map_err(election_error)
    };

    // A tie is reported before missing seats.
    assert!(matches!(
        submit(RegionResult::new("Texas", 100, 100, 0)),
        Err(ElectionError::Tie)
    ));
    assert!(matches!(
        submit(RegionResult::new("Texas", 100, 90, 0)),
        Err(ElectionError::NoSeats)
    ));
    submit(RegionResult::new("Texas", 100, 90, 38)).unwrap();

    // A duplicate is reported before a tie.
    assert!(matches!(
        submit(RegionResult::new("Texas", 100, 100, 0)),
        Err(ElectionError::DuplicateRegion(name)) if name == "Texas"
    ));
}

#[test]
fn test_closed_election_rejects_everything() {
    let admin = Address::from([1; 32]);
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();
    let election = UsElection::<C>::default();
    let context = C::new(admin);
    election
        .genesis(&UsElectionConfig { admin }, &mut working_set)
        .unwrap();
    election
        .call(CallMessage::EndElection, &context, &mut working_set)
        .unwrap();

    // Closed is reported before any other problem with the result.
    let err = election
        .call(
            CallMessage::SubmitRegionResult(RegionResult::new("Texas", 100, 100, 0)),
            &context,
            &mut working_set,
        )
        .unwrap_err();
    assert!(matches!(election_error(err), ElectionError::ElectionClosed));

    let err = election
        .call(CallMessage::EndElection, &context, &mut working_set)
        .unwrap_err();
    assert!(matches!(election_error(err), ElectionError::ElectionClosed));

    // The admin check comes first when closing.
    let err = election
        .call(
            CallMessage::EndElection,
            &C::new(Address::from([2; 32])),
            &mut working_set,
        )
        .unwrap_err();
    assert!(matches!(election_error(err), ElectionError::NotAuthorized));
}

#[test]
fn test_seat_count_overflow() {
    let admin = Address::from([1; 32]);
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();
    let election = UsElection::<C>::default();
    let context = C::new(admin);
    election
        .genesis(&UsElectionConfig { admin }, &mut working_set)
        .unwrap();

    election
        .call(
            CallMessage::SubmitRegionResult(RegionResult::new("Huge", 2, 1, u64::MAX)),
            &context,
            &mut working_set,
        )
        .unwrap();
    let err = election
        .call(
            CallMessage::SubmitRegionResult(RegionResult::new("Tiny", 2, 1, 1)),
            &context,
            &mut working_set,
        )
        .unwrap_err();

    assert!(matches!(
        election_error(err),
        ElectionError::SeatCountOverflow
    ));
    assert_eq!(
        election.seats_for(Candidate::CandidateA, &working_set),
        u64::MAX
    );
}

#[test]
fn test_genesis_runs_once() {
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();
    let election = UsElection::<C>::default();
    let config = UsElectionConfig {
        admin: Address::from([1; 32]),
    };

    election.genesis(&config, &mut working_set).unwrap();
    let err = election.genesis(&config, &mut working_set).unwrap_err();
    assert!(matches!(
        election_error(err),
        ElectionError::AlreadyInitialized
    ));
}

#[test]
fn test_uninitialized_module_refuses_calls() {
    let storage = InMemoryStorage::new();
    let mut working_set = storage.working_set();
    let election = UsElection::<C>::default();
    let context = C::new(Address::from([1; 32]));

    let err = election
        .call(CallMessage::EndElection, &context, &mut working_set)
        .unwrap_err();
    assert!(matches!(election_error(err), ElectionError::State(_)));
    assert!(election.admin(&working_set).is_err());
}

#[test]
fn test_module_info() {
    let election = UsElection::<C>::default();
    assert_eq!(election.prefix().to_string(), "us_election/UsElection/");
    assert_eq!(
        election.address(),
        &generate_address::<C>("us_election/UsElection/")
    );
}

#[test]
fn test_call_message_json_schema() {
    let schema = <UsElection<C> as ModuleCallJsonSchema>::json_schema();
    assert!(schema.contains("SubmitRegionResult"));
    assert!(schema.contains("EndElection"));
    assert!(schema.contains("votes_a"));
}

#[test]
fn test_call_message_serde() {
    let msg = CallMessage::SubmitRegionResult(RegionResult::new("Ohio", 800, 1200, 33));
    let json = serde_json::to_string(&msg).unwrap();
    assert_eq!(
        json,
        r#"{"SubmitRegionResult":{"name":"Ohio","votes_a":800,"votes_b":1200,"seats":33}}"#
    );
    assert_eq!(serde_json::from_str::<CallMessage>(&json).unwrap(), msg);
    assert_eq!(
        serde_json::from_str::<CallMessage>(r#""EndElection""#).unwrap(),
        CallMessage::EndElection
    );
}

#[test]
fn test_region_winner() {
    let tie = RegionResult::new("Texas", 100, 100, 10);
    assert_eq!(tie.winner(), Candidate::None);
    assert_eq!(Candidate::default(), Candidate::None);

    let a = RegionResult::new("Texas", 101, 100, 10);
    assert_eq!(a.winner(), Candidate::CandidateA);
    let b = RegionResult::new("Texas", 0, 1, 10);
    assert_eq!(b.winner(), Candidate::CandidateB);
}
