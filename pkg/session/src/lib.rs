pub mod context;
pub mod cookie;
pub mod jwt;

pub use context::{RequestContext, SessionSource};
pub use jwt::{JwtDecoder, JwtPayload};

#[cfg(feature = "mock")]
pub use context::mock;

/// The session token cookie key.
pub const SESSION_TOKEN_COOKIE_KEY: &'static str = "session_token";
