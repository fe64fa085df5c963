use serde::{Deserialize, Serialize};

use crate::models::UserData;

/// Outcome of a form-submitting operation.
///
/// Serialized with a `status` tag so form handlers branch on the tag
/// instead of catching errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormState {
    /// The operation completed; `message` is user-presentable.
    Success { message: String },

    /// The operation failed; `message` says why.
    Failed { message: String },
}

impl FormState {
    pub(crate) fn failed<M: Into<String>>(message: M) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Outcome of fetching the caller's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchState {
    /// The fetched profile, already validated.
    Success { data: UserData },

    /// The fetch failed; `message` says why.
    Failed { message: String },
}

impl FetchState {
    pub(crate) fn failed<M: Into<String>>(message: M) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}
