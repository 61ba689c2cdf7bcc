//! Signed session tokens: claims payload and the codec that mints and
//! verifies them.

pub mod claims;
pub mod codec;

pub use claims::{Claims, TokenType};
pub use codec::{TokenCodec, TokenPair};
