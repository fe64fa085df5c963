use crate::client::ApiError;
use crate::validate::ValidateUserDataError;

/// Internal operation errors.
///
/// Never crosses the public boundary: each operation catches these and folds
/// them into a failed state message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The decoded session payload has no string `id` claim.
    #[error("No payload id")]
    MissingPayloadId,

    #[error(transparent)]
    InvalidUserData(#[from] ValidateUserDataError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to parse response body: {0}")]
    ParseBody(#[from] serde_json::Error),
}
