//! State storage for the election module system.
//!
//! Modules keep their state in typed containers ([`StateValue`], [`StateMap`])
//! addressed by a [`Prefix`]. Every call runs against a [`WorkingSet`], which
//! buffers writes and events until it is committed or reverted as a whole.

pub mod codec;
mod containers;
mod event;
mod scratchpad;
mod storage;

pub use containers::{StateError, StateMap, StateValue};
pub use event::Event;
pub use scratchpad::{StateReader, StateSnapshot, StateWriter, WorkingSet};
pub use storage::{InMemoryStorage, Prefix, StorageKey};
