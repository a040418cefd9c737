//! HTTP API for the activity roster.
//!
//! Exposes listing, signup and removal over a single in-memory directory,
//! plus the static front page.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
