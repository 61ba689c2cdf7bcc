//! # skillswap-auth
//!
//! Session authentication for SkillSwap: signed token issuance and
//! verification, password hashing, and the login/register/refresh flows.
//!
//! The server holds no session record; the access/refresh token pair bound
//! to the caller's cookie store *is* the session.

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, TokenCodec, TokenPair, TokenType};
pub use password::PasswordHasher;
pub use session::{AuthenticatedMember, SessionService};
