pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod validate;

mod fetch_me;
mod fixture;
mod update_user;

use crate::client::ProfileApi;
use session::SessionSource;

/// The user profile actions of a single request.
///
/// Holds the session accessor and the backend client consumed by
/// [`update_user`](ProfileActions::update_user) and
/// [`fetch_me`](ProfileActions::fetch_me).
pub struct ProfileActions<S, A> {
    /// The session accessor of the current request.
    pub session: S,

    /// The backend user API client.
    pub api: A,
}

impl<S, A> ProfileActions<S, A>
where
    S: SessionSource,
    A: ProfileApi,
{
    /// Creates new profile actions for a single request.
    pub fn new(session: S, api: A) -> Self {
        Self { session, api }
    }
}
