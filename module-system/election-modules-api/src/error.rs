use thiserror::Error as ThisError;

/// General error type in the module system.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Custom error thrown by a module.
    #[error(transparent)]
    ModuleError(#[from] anyhow::Error),
}

#[derive(Debug, ThisError)]
pub enum Bech32ParseError {
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
    #[error("Wrong HRP: {0}")]
    WrongHRP(String),
    #[error("Invalid address length: {0} bytes, expected 32")]
    InvalidLength(usize),
}
