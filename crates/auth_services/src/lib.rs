//! # Auth Services
//!
//! This crate provides the shared authentication vocabulary for the application.
//! It defines the outcome of an authentication check, which the validator produces
//! and the request handlers consume.

/// Types and structures used in authentication services.
pub mod types;

pub use types::{AuthError, AuthStatus};
