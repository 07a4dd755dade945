//! UseCase errors.

use thiserror::Error;

use crate::domain::RegistryError;

/// Errors returned by `ConnectClientUseCase`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("Failed to register connection: {0}")]
    Registry(#[from] RegistryError),
}
