//! # skillswap-core
//!
//! Core crate for SkillSwap. Contains trait ports, configuration schemas,
//! shared domain types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SkillSwap crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
