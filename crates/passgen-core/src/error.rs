use thiserror::Error;

/// Core error type.
///
/// Only raised when a textual value cannot be mapped onto a core contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown generation type: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
