use serde::{Deserialize, Serialize};

use crate::{Address, Context, Spec};

/// The context used by native execution: the caller is whatever address the
/// host says it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultContext {
    pub sender: Address,
}

impl Spec for DefaultContext {
    type Address = Address;
    type Hasher = sha2::Sha256;
}

impl Context for DefaultContext {
    fn sender(&self) -> &Self::Address {
        &self.sender
    }

    fn new(sender: Self::Address) -> Self {
        Self { sender }
    }
}
