use election_modules_api::default_context::DefaultContext;
use election_modules_api::utils::generate_address;
use election_modules_api::{Context, Spec};
use us_election::{ElectionTracker, RegionResult};

pub type C = DefaultContext;

#[allow(dead_code)]
pub fn admin_address() -> <C as Spec>::Address {
    generate_address::<C>("admin")
}

#[allow(dead_code)]
pub fn admin() -> C {
    C::new(admin_address())
}

pub fn voter(name: &str) -> C {
    C::new(generate_address::<C>(name))
}

pub fn setup() -> ElectionTracker<C> {
    ElectionTracker::new(admin_address()).expect("A fresh election always opens")
}

#[allow(dead_code)]
pub fn region(name: &str, votes_a: u64, votes_b: u64, seats: u64) -> RegionResult {
    RegionResult::new(name, votes_a, votes_b, seats)
}
