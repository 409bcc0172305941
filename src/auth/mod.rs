//! Authentication module
//!
//! Provides JWT-based session authentication with HTTP-only cookies

pub mod jwt;
pub mod middleware;
pub mod session;

pub use jwt::{AuthUser, Claims, generate_token, validate_token};
pub use middleware::auth_middleware;
pub use session::SessionService;

/// Cookie name for the session token
pub const TOKEN_COOKIE_NAME: &str = "token";
