use tracing::instrument;

use crate::{
    ProfileActions,
    client::ProfileApi,
    error::Error,
    models::UserData,
    state::FormState,
    validate::validate_user_data,
};
use session::SessionSource;

impl<S, A> ProfileActions<S, A>
where
    S: SessionSource,
    A: ProfileApi,
{
    /// Updates the caller's profile from form data.
    ///
    /// Always resolves to a [`FormState`]: every internal error is caught at
    /// this boundary and folded into a failed state, so form handlers only
    /// branch on the status tag.
    #[instrument(skip_all)]
    pub async fn update_user(&self, data: UserData) -> FormState {
        match self.try_update_user(data).await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "update user failed");
                FormState::failed(format!("Failed to update user due to error: {err}"))
            }
        }
    }

    async fn try_update_user(&self, data: UserData) -> Result<FormState, Error> {
        validate_user_data(&data)?;

        let Some(token) = self.session.session_token() else {
            return Ok(FormState::failed("No session cookie found"));
        };

        let user_id = self
            .session
            .jwt_payload()
            .await
            .and_then(|payload| payload.string_id().map(str::to_string))
            .ok_or(Error::MissingPayloadId)?;

        let response = self.api.update_user(&user_id, &token, &data).await?;
        if !response.status.is_success() {
            return Ok(FormState::failed(
                response.failure_message("Update user failed"),
            ));
        }

        Ok(FormState::Success {
            message: format!("User {} is updated successfully.", data.display_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;
    use serde_json::json;
    use session::JwtPayload;
    use session::mock::MockSession;
    use tokio::sync::Mutex;

    use crate::{
        ProfileActions,
        client::{ApiError, ApiResponse, testutils::MockProfileApi},
        fixture::{fixture_payload, fixture_user_data},
        models::UserData,
        state::FormState,
    };

    fn ok_response() -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse {
            status: StatusCode::OK,
            body: String::new(),
        })
    }

    #[rstest]
    #[case::happy_path(
        fixture_user_data(|_| {}),
        Some("token"),
        Some(fixture_payload(|_| {})),
        Some(ok_response()),
        FormState::Success {
            message: "User name is updated successfully.".to_string(),
        },
        true
    )]
    #[case::no_session_cookie(
        fixture_user_data(|_| {}),
        None,
        Some(fixture_payload(|_| {})),
        None,
        FormState::Failed {
            message: "No session cookie found".to_string(),
        },
        false
    )]
    #[case::missing_payload(
        fixture_user_data(|_| {}),
        Some("token"),
        None,
        None,
        FormState::Failed {
            message: "Failed to update user due to error: No payload id".to_string(),
        },
        false
    )]
    #[case::payload_id_not_a_string(
        fixture_user_data(|_| {}),
        Some("token"),
        Some(fixture_payload(|p| p.id = Some(json!(42)))),
        None,
        FormState::Failed {
            message: "Failed to update user due to error: No payload id".to_string(),
        },
        false
    )]
    #[case::invalid_form_data(
        fixture_user_data(|d| d.display_name.clear()),
        Some("token"),
        Some(fixture_payload(|_| {})),
        None,
        FormState::Failed {
            message: "Failed to update user due to error: missing display name".to_string(),
        },
        false
    )]
    #[case::backend_error_with_body(
        fixture_user_data(|_| {}),
        Some("token"),
        Some(fixture_payload(|_| {})),
        Some(Ok(ApiResponse {
            status: StatusCode::NOT_FOUND,
            body: "not found".to_string(),
        })),
        FormState::Failed {
            message: "not found (404)".to_string(),
        },
        true
    )]
    #[case::backend_error_empty_body(
        fixture_user_data(|_| {}),
        Some("token"),
        Some(fixture_payload(|_| {})),
        Some(Ok(ApiResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        })),
        FormState::Failed {
            message: "Update user failed (500)".to_string(),
        },
        true
    )]
    #[tokio::test]
    async fn test_update_user(
        #[case] data: UserData,
        #[case] token: Option<&str>,
        #[case] payload: Option<JwtPayload>,
        #[case] api_result: Option<Result<ApiResponse, ApiError>>,
        #[case] want: FormState,
        #[case] want_api_called: bool,
    ) {
        // given
        let session = MockSession {
            token: token.map(String::from),
            payload,
        };
        let api = MockProfileApi {
            update_user_resp: Mutex::new(api_result),
            ..Default::default()
        };
        let actions = ProfileActions::new(session, api);

        // when
        let got = actions.update_user(data).await;

        // then
        assert_eq!(got, want);

        let called = actions.api.update_user_req.lock().await.is_some();
        assert_eq!(called, want_api_called, "api call mismatch");
    }

    #[tokio::test]
    async fn test_update_user_sends_identity_and_validated_data() {
        // given
        let data = fixture_user_data(|_| {});
        let session = MockSession {
            token: Some("token".to_string()),
            payload: Some(fixture_payload(|_| {})),
        };
        let api = MockProfileApi {
            update_user_resp: Mutex::new(Some(ok_response())),
            ..Default::default()
        };
        let actions = ProfileActions::new(session, api);

        // when
        actions.update_user(data.clone()).await;

        // then
        let req = actions.api.update_user_req.lock().await.take().unwrap();
        assert_eq!(req, ("user-1".to_string(), "token".to_string(), data));
    }
}
