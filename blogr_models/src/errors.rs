use thiserror::Error;

use blogr_utils::{
    passwords::PasswordError,
    tokens::TokenError,
};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("password hashing error")]
    PasswordError(#[from] PasswordError),

    #[error(transparent)]
    TokenError(#[from] TokenError),

    #[error("token was issued for another user")]
    TokenMismatch,

    #[error("{0} already exists")]
    AlreadyExists(&'static str), // object type

    #[error("{0}")]
    InvalidData(&'static str),

    #[error("permission error")]
    PermissionError,
}
