//! Trait ports to external collaborators.
//!
//! Entity persistence lives behind these traits; the auth and scheduling
//! subsystems never talk to a database directly.

pub mod availability;
pub mod directory;

pub use availability::AvailabilityRepository;
pub use directory::MemberDirectory;
