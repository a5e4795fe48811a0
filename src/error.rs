use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum CompassError {
    /// A user with the given email is already registered
    #[error("User already exists")]
    DuplicateUser,

    /// Login failed; deliberately identical for unknown email and wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Catch-all for unexpected failures (token encoding, hashing, time)
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<bcrypt::BcryptError> for CompassError {
    fn from(err: bcrypt::BcryptError) -> Self {
        CompassError::InternalServerError(format!("Hashing error: {}", err))
    }
}
