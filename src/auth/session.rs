//! Session issuance, authorization, and termination
//!
//! The server holds no session store; the signed token carried by the
//! `token` cookie is the only session state.

use super::TOKEN_COOKIE_NAME;
use super::jwt::{AuthUser, generate_token, validate_token};
use crate::config::AuthConfig;
use crate::error::AuthError;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{debug, warn};

/// Issues, checks, and clears session token cookies
///
/// All secrets and credentials are explicit configuration handed in at
/// construction, so tests can run the service with their own secrets.
#[derive(Clone)]
pub struct SessionService {
    auth: AuthConfig,
}

impl SessionService {
    pub fn new(auth: AuthConfig) -> Self {
        Self { auth }
    }

    /// Check a credential pair and produce the session cookie directive
    ///
    /// The cookie carries no explicit expiry; browsers treat it as a
    /// session cookie while the token enforces its own lifetime.
    pub fn issue_session(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Cookie<'static>, AuthError> {
        if username != self.auth.admin_username || password != self.auth.admin_password {
            warn!(username = %username, "Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let token = generate_token(username, &self.auth.secret, self.auth.token_lifetime_seconds)?;

        debug!(username = %username, "Session token issued");

        Ok(Cookie::build((TOKEN_COOKIE_NAME, token))
            .path("/")
            .http_only(true)
            .build())
    }

    /// Verify the session cookie attached to an inbound request
    pub fn authorize(&self, jar: &CookieJar) -> Result<AuthUser, AuthError> {
        let Some(cookie) = jar.get(TOKEN_COOKIE_NAME) else {
            warn!("No session token found in request");
            return Err(AuthError::Unauthenticated);
        };

        match validate_token(cookie.value(), &self.auth.secret, self.auth.leeway_seconds) {
            Ok(user) => Ok(user),
            Err(e) => {
                warn!(error = %e, "Invalid or expired session token");
                Err(AuthError::InvalidToken)
            }
        }
    }

    /// Produce the directive that clears the session cookie client-side
    ///
    /// Always a removal cookie, whether or not the request carried a
    /// session. There is no server-side invalidation list; a token value
    /// retained by the client stays valid until its embedded expiry.
    pub fn terminate_session(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((TOKEN_COOKIE_NAME, ""))
            .path("/")
            .http_only(true)
            .build();
        cookie.make_removal();
        cookie
    }
}
