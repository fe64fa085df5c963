use serde::{Deserialize, Serialize};

/// A user profile form record.
///
/// Fields serialize in camelCase because the backend user API speaks the
/// same JSON as the web form. Unknown fields from the backend are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// The user's display name.
    pub display_name: String,

    /// The user's contact email.
    pub email: String,
}
