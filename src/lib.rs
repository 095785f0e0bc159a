//! Resource identity for policy evaluation
//!
//! Resolves a provider namespace plus an attribute bag into a [`Resource`]
//! exposing a provider-qualified type and a canonical full resource name.
//!
//! - [`resource`] - Registry, factory and the provider-independent model
//! - [`gcp`] - The Google Cloud resource kinds
//! - [`config`] - Persisted defaults for the command-line tool
//! - [`error`] - Error taxonomy

pub mod config;
pub mod error;
pub mod gcp;
pub mod resource;

pub use error::{ResourceError, Result};
pub use resource::{resolve, AttributeBag, Resource};
