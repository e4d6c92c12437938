//! The interface between election modules and whoever hosts them.
//!
//! A module implements [`Module`]: it is initialized once through
//! [`Module::genesis`] and then driven by call messages, each executed with a
//! [`Context`] that carries the caller's address.

mod address;
pub mod default_context;
mod error;
mod module;
pub mod utils;

use core::fmt::Debug;

pub use address::{Address, AddressBech32, AddressTrait};
pub use election_state::{
    Event, InMemoryStorage, Prefix, StateError, StateMap, StateReader, StateSnapshot, StateValue,
    StateWriter, WorkingSet,
};
pub use error::{Bech32ParseError, Error};
pub use module::{CallResponse, Module, ModuleCallJsonSchema, ModuleInfo};
use sha2::digest::consts::U32;
pub use sha2::Digest;

/// The types a module system is parameterized over.
pub trait Spec {
    /// The address type of callers and modules.
    type Address: AddressTrait;

    /// The hasher used to derive addresses.
    type Hasher: Digest<OutputSize = U32>;
}

/// The execution context of a call: who is calling.
///
/// The sender is supplied by the host, never by the call message itself.
pub trait Context: Spec + Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Returns the sender of the call.
    fn sender(&self) -> &Self::Address;

    /// Constructor for the Context.
    fn new(sender: Self::Address) -> Self;
}
