//! Core types for the activity roster service.
//!
//! Defines activities, the directory that owns them, and the enrollment
//! rules: unknown activities are rejected, an email appears at most once per
//! roster, and removal only succeeds for enrolled emails.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod directory;
pub mod error;
pub mod id;
pub mod policy;
pub mod seed;

pub use activity::Activity;
pub use directory::{Directory, Enrollment};
pub use error::{CoreError, DirectoryError};
pub use id::{ActivityName, Email};
pub use policy::CapacityPolicy;
pub use seed::{default_seed, Seed};
