//! Authentication module
//!
//! Provides stateless signed-token authentication with argon2 password
//! hashing.

mod middleware;
mod password;
mod token;

pub use middleware::AuthUser;
pub use password::PasswordService;
pub use token::{Claims, TokenService};
