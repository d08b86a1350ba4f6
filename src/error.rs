use thiserror::Error;

use crate::model::Role;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced only in strict mode or with role enforcement turned on.
/// The default configuration never produces them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{action} is not allowed for role {}", .role.as_str())]
    Forbidden { action: &'static str, role: Role },

    #[error("{action} requires a signed-in user")]
    NotSignedIn { action: &'static str },
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "not_found",
            StoreError::Forbidden { .. } => "forbidden",
            StoreError::NotSignedIn { .. } => "not_signed_in",
        }
    }
}
