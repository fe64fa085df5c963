use async_trait::async_trait;
use http::{HeaderMap, header::COOKIE};

use crate::cookie::extract_session_token_cookie;
use crate::jwt::{JwtDecoder, JwtPayload};

/// Read-only access to the caller's session.
///
/// Both accessors are fallible: a missing token means the request carries no
/// session, a missing payload means the token could not be decoded.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Returns the raw session token from the request cookie, if any.
    fn session_token(&self) -> Option<String>;

    /// Returns the decoded payload of the session token, if any.
    async fn jwt_payload(&self) -> Option<JwtPayload>;
}

/// Session accessor built from the headers of a single request.
///
/// Constructed once per call so operations receive the session explicitly
/// instead of reaching into ambient request state.
pub struct RequestContext {
    token: Option<String>,
    decoder: JwtDecoder,
}

impl RequestContext {
    /// Creates a context from a request header map.
    pub fn from_headers(headers: &HeaderMap, decoder: JwtDecoder) -> Self {
        let token = headers.get(COOKIE).and_then(extract_session_token_cookie);
        Self { token, decoder }
    }
}

#[async_trait]
impl SessionSource for RequestContext {
    fn session_token(&self) -> Option<String> {
        self.token.clone()
    }

    async fn jwt_payload(&self) -> Option<JwtPayload> {
        let token = self.token.as_deref()?;
        match self.decoder.decode_payload(token) {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::debug!(error = %err, "session token rejected");
                None
            }
        }
    }
}

#[cfg(feature = "mock")]
pub mod mock {
    use super::*;

    /// Mock session accessor for tests.
    pub struct MockSession {
        /// The token to return from `session_token`.
        pub token: Option<String>,

        /// The payload to return from `jwt_payload`.
        pub payload: Option<JwtPayload>,
    }

    #[async_trait]
    impl SessionSource for MockSession {
        fn session_token(&self) -> Option<String> {
            self.token.clone()
        }

        async fn jwt_payload(&self) -> Option<JwtPayload> {
            self.payload.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"test-secret";

    fn fixture_headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    fn fixture_token() -> String {
        #[derive(serde::Serialize)]
        struct Claims {
            id: serde_json::Value,
            exp: u64,
        }
        encode(
            &Header::new(Algorithm::HS256),
            &Claims {
                id: json!("user-1"),
                exp: 4_102_444_800,
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_request_context() {
        // given
        let token = fixture_token();
        let headers = fixture_headers(&format!("theme=dark; session_token={token}"));

        // when
        let context = RequestContext::from_headers(&headers, JwtDecoder::new(SECRET));

        // then
        assert_eq!(context.session_token(), Some(token));
        let payload = context.jwt_payload().await.unwrap();
        assert_eq!(payload.string_id(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_request_context_without_session_cookie() {
        // given
        let headers = fixture_headers("theme=dark");

        // when
        let context = RequestContext::from_headers(&headers, JwtDecoder::new(SECRET));

        // then
        assert_eq!(context.session_token(), None);
        assert!(context.jwt_payload().await.is_none());
    }

    #[tokio::test]
    async fn test_request_context_with_undecodable_token() {
        // given
        let headers = fixture_headers("session_token=garbage");

        // when
        let context = RequestContext::from_headers(&headers, JwtDecoder::new(SECRET));

        // then
        assert_eq!(context.session_token(), Some("garbage".to_string()));
        assert!(context.jwt_payload().await.is_none());
    }
}
