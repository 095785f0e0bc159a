//! GCP provider
//!
//! Registers the Google Cloud resource kinds under the `gcp` namespace.
//!
//! # Module Structure
//!
//! - [`kinds`] - The GCP resource kinds and their full-name templates
//!
//! # Example
//!
//! ```
//! use rpe::gcp::{self, GcpResourceKind};
//! use rpe::resource::{ResourceKind, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! gcp::register_all(&mut registry).unwrap();
//! assert_eq!(
//!     registry.lookup("gcp", "compute.instances").unwrap().type_key(),
//!     GcpResourceKind::ComputeInstance.type_key(),
//! );
//! ```

pub mod kinds;

pub use kinds::{GcpResourceKind, GCP_KINDS};

use crate::error::Result;
use crate::resource::TypeRegistry;

/// Provider namespace for GCP kinds
pub const PROVIDER: &str = "gcp";

/// Register every GCP kind
pub fn register_all(registry: &mut TypeRegistry) -> Result<()> {
    for kind in &GCP_KINDS {
        registry.register(PROVIDER, kind)?;
    }
    Ok(())
}
