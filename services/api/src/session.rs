//! Process-local session registry
//!
//! A session token is the email of the user who logged in. The registry is
//! the only evidence that a token was issued by this process; it is never
//! persisted and is cleared by a restart.

use axum_extra::extract::cookie::Cookie;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use time::Duration;
use tracing::{info, warn};

use crate::error::ApiError;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "SESSION_ID";

/// Lifetime advertised to the client, in seconds (one day)
pub const SESSION_MAX_AGE_SECS: i64 = 24 * 60 * 60;

/// Session registry shared by all request handlers
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Cookie<'static>>>>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a session for `email` and record it as active.
    ///
    /// Issuing again for the same email replaces the previous entry. An email
    /// that cannot be carried verbatim in a cookie is refused and nothing is
    /// recorded.
    pub fn issue(&self, email: &str) -> Result<Cookie<'static>, ApiError> {
        if !is_cookie_value(email) {
            warn!("Refusing session for email outside cookie-octets: {:?}", email);
            return Err(ApiError::internal("session token is not a valid cookie value"));
        }

        let cookie = Cookie::build((SESSION_COOKIE, email.to_string()))
            .path("/")
            .max_age(Duration::seconds(SESSION_MAX_AGE_SECS))
            .build();

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ApiError::internal("session registry lock poisoned"))?;
        sessions.insert(email.to_string(), cookie.clone());

        info!("Session issued for {}", email);
        Ok(cookie)
    }

    /// Whether `token` belongs to a session issued by this process
    pub fn contains(&self, token: &str) -> Result<bool, ApiError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| ApiError::internal("session registry lock poisoned"))?;
        Ok(sessions.contains_key(token))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// RFC 6265 `cookie-value` restricted to unquoted `cookie-octet`s: visible
/// ASCII except DQUOTE, comma, semicolon and backslash.
fn is_cookie_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E))
}
