//! Validation of user profile data.
//!
//! Outbound data comes from a local form, so a rule violation aborts the
//! whole operation. Inbound data comes from an external service, so the
//! parse variant reports instead of propagating.

use serde_json::Value;

use crate::models::UserData;

/// The longest accepted display name, in characters.
pub const MAX_DISPLAY_NAME_CHARS: usize = 50;

/// Validates outbound form data before it is sent to the backend.
pub fn validate_user_data(data: &UserData) -> Result<(), ValidateUserDataError> {
    if data.display_name.is_empty() {
        return Err(ValidateUserDataError::MissingDisplayName);
    }

    if data.display_name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(ValidateUserDataError::DisplayNameTooLong);
    }

    if data.email.is_empty() {
        return Err(ValidateUserDataError::MissingEmail);
    }

    if !data.email.contains('@') {
        return Err(ValidateUserDataError::InvalidEmail(data.email.clone()));
    }

    Ok(())
}

/// Parses and validates inbound profile data.
///
/// # Errors
/// - the value does not have the [`UserData`] shape
/// - the value violates a [`validate_user_data`] rule
pub fn parse_user_data(value: Value) -> Result<UserData, ValidateUserDataError> {
    let data: UserData = serde_json::from_value(value)?;
    validate_user_data(&data)?;
    Ok(data)
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidateUserDataError {
    #[error("missing display name")]
    MissingDisplayName,

    #[error("display name longer than {MAX_DISPLAY_NAME_CHARS} characters")]
    DisplayNameTooLong,

    #[error("missing email")]
    MissingEmail,

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("unexpected profile shape: {0}")]
    UnexpectedShape(#[from] serde_json::Error),
}
