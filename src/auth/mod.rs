pub mod jwt;
pub mod password;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("user account is inactive")]
    InactiveUser,
    #[error("failed to create access token: {0}")]
    TokenCreation(String),
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

pub use jwt::{create_access_token, decode_access_token, Claims};
pub use password::{hash_password, verify_password};
