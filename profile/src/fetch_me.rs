use tracing::instrument;

use crate::{
    ProfileActions,
    client::ProfileApi,
    error::Error,
    state::FetchState,
    validate::parse_user_data,
};
use session::SessionSource;

impl<S, A> ProfileActions<S, A>
where
    S: SessionSource,
    A: ProfileApi,
{
    /// Fetches the caller's own profile.
    ///
    /// Always resolves to a [`FetchState`]; a success never carries partial
    /// or unvalidated data.
    #[instrument(skip_all)]
    pub async fn fetch_me(&self) -> FetchState {
        match self.try_fetch_me().await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "fetch user data failed");
                FetchState::failed(format!("Error fetching user data: {err}"))
            }
        }
    }

    async fn try_fetch_me(&self) -> Result<FetchState, Error> {
        let Some(token) = self.session.session_token() else {
            return Ok(FetchState::failed("No session cookie found"));
        };

        let user_id = self
            .session
            .jwt_payload()
            .await
            .and_then(|payload| payload.string_id().map(str::to_string))
            .ok_or(Error::MissingPayloadId)?;

        let response = self.api.fetch_user(&user_id, &token).await?;
        if !response.status.is_success() {
            return Ok(FetchState::failed(
                response.failure_message("Fetch user data failed"),
            ));
        }

        let body: serde_json::Value = serde_json::from_str(&response.body)?;
        let data = match parse_user_data(body) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "profile response failed validation");
                return Ok(FetchState::failed("Data validation failed"));
            }
        };

        Ok(FetchState::Success { data })
    }
}
