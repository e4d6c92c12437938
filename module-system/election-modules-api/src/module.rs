use core::fmt::Debug;

use borsh::{BorshDeserialize, BorshSerialize};
use election_state::{Prefix, WorkingSet};

use crate::error::Error;
use crate::{Context, Spec};

/// Response type for the `Module::call` method.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct CallResponse {}

/// A module owns a slice of state and mutates it in response to call
/// messages.
pub trait Module {
    /// Execution context.
    type Context: Context;

    /// Configuration for the genesis method.
    type Config;

    /// Module defined argument to the call method.
    type CallMessage: Debug + BorshSerialize + BorshDeserialize;

    /// Genesis is called once, when the module is created, and can be used to
    /// set initial state values in the module.
    fn genesis(
        &self,
        _config: &Self::Config,
        _working_set: &mut WorkingSet<'_>,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Call allows interaction with the module and invokes state changes.
    /// It takes a module defined type and a context as parameters.
    ///
    /// An error leaves whatever the call wrote in `working_set`; it is up to
    /// the caller to revert it.
    fn call(
        &self,
        message: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<'_>,
    ) -> Result<CallResponse, Error>;
}

/// A [`Module`] that has a well-defined and known [JSON
/// Schema](https://json-schema.org/) for its [`Module::CallMessage`].
///
/// This trait is intended to support code generation tools, CLIs, and
/// documentation.
pub trait ModuleCallJsonSchema: Module {
    /// Returns the JSON schema for [`Module::CallMessage`].
    fn json_schema() -> String;
}

/// Every module has to implement this trait.
pub trait ModuleInfo {
    /// Execution context.
    type Context: Context;

    /// Returns address of the module.
    fn address(&self) -> &<Self::Context as Spec>::Address;

    /// Returns the prefix of the module.
    fn prefix(&self) -> Prefix;
}
