//! Resource identity layer
//!
//! This module turns a provider namespace and an attribute bag into a
//! resolved [`Resource`] carrying a canonical full resource name.
//!
//! # Architecture
//!
//! - [`attributes`] - The caller-supplied attribute bag
//! - [`kind`] - The [`ResourceKind`] trait and full-name templates
//! - [`registry`] - Provider-scoped bindings from type key to kind
//! - [`factory`] - Resolution of an attribute bag through the registry
//!
//! # Example
//!
//! ```
//! use rpe::resource::{resolve, AttributeBag};
//!
//! let attrs = AttributeBag::from([
//!     ("resource_type", "storage.buckets"),
//!     ("resource_name", "my_resource"),
//! ]);
//! let bucket = resolve("gcp", attrs).unwrap();
//! assert_eq!(bucket.resource_type(), "gcp.storage.buckets");
//! assert_eq!(bucket.full_resource_name(), "//storage.googleapis.com/buckets/my_resource");
//! ```

pub mod attributes;
pub mod factory;
pub mod kind;
pub mod registry;

pub use attributes::{
    AttributeBag, PROJECT_ID_ATTR, RESOURCE_LOCATION_ATTR, RESOURCE_NAME_ATTR, RESOURCE_TYPE_ATTR,
};
pub use factory::resolve;
pub use kind::{LocationScope, NameTemplate, ResourceKind};
pub use registry::{get_registry, TypeRegistry};

use crate::error::Result;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// A resolved resource
///
/// Holding a `Resource` means its attributes passed validation; the type and
/// full resource name are computed once at construction and never change.
#[derive(Debug, Clone)]
pub struct Resource {
    provider: String,
    kind: &'static dyn ResourceKind,
    attributes: AttributeBag,
    resource_type: String,
    full_resource_name: String,
}

impl Resource {
    /// Validate `attributes` against `kind` and build the resource
    pub fn new(
        provider: &str,
        kind: &'static dyn ResourceKind,
        attributes: AttributeBag,
    ) -> Result<Self> {
        kind.validate(provider, &attributes)?;

        let full_resource_name = kind.full_resource_name(&attributes);
        Ok(Self {
            provider: provider.to_string(),
            kind,
            resource_type: format!("{}.{}", provider, kind.type_key()),
            full_resource_name,
            attributes,
        })
    }

    /// Provider-qualified type, e.g. `gcp.compute.instances`
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn full_resource_name(&self) -> &str {
        &self.full_resource_name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Type key without the provider prefix
    pub fn type_key(&self) -> &'static str {
        self.kind.type_key()
    }

    pub fn kind(&self) -> &'static dyn ResourceKind {
        self.kind
    }

    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.attribute(RESOURCE_NAME_ATTR)
    }

    pub fn project_id(&self) -> Option<&str> {
        self.attribute(PROJECT_ID_ATTR)
    }

    pub fn resource_location(&self) -> Option<&str> {
        self.attribute(RESOURCE_LOCATION_ATTR)
    }

    /// Type of the resource this policy view belongs to
    pub fn iam_parent_type(&self) -> Option<String> {
        self.kind
            .iam_parent()
            .map(|parent| format!("{}.{}", self.provider, parent.type_key()))
    }

    pub fn is_iam_policy(&self) -> bool {
        self.kind.iam_parent().is_some()
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.resource_type == other.resource_type
            && self.full_resource_name == other.full_resource_name
            && self.attributes == other.attributes
    }
}

impl Eq for Resource {}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.resource_type, self.full_resource_name)
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Resource", 3)?;
        state.serialize_field("type", &self.resource_type)?;
        state.serialize_field("name", &self.full_resource_name)?;
        state.serialize_field("attributes", &self.attributes)?;
        state.end()
    }
}
