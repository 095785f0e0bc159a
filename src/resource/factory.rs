//! Resource Factory
//!
//! Resolves an attribute bag into a validated [`Resource`].

use super::attributes::{AttributeBag, RESOURCE_TYPE_ATTR};
use super::registry::{get_registry, TypeRegistry};
use super::Resource;
use crate::error::{ResourceError, Result};

impl TypeRegistry {
    /// Resolve `attributes` against the kinds registered for `provider`
    ///
    /// Either a fully validated resource is returned or nothing is; the
    /// registry itself is never touched.
    pub fn resolve(&self, provider: &str, attributes: AttributeBag) -> Result<Resource> {
        tracing::trace!("resolve: provider={}, attributes={:?}", provider, attributes);

        let result = self.resolve_inner(provider, attributes);
        if let Err(ref e) = result {
            tracing::debug!("resolve failed: provider={}, error={}", provider, e);
        }
        result
    }

    fn resolve_inner(&self, provider: &str, attributes: AttributeBag) -> Result<Resource> {
        let Some(type_key) = attributes.get_non_empty(RESOURCE_TYPE_ATTR) else {
            return Err(ResourceError::InvalidInput(RESOURCE_TYPE_ATTR));
        };

        let kind = self.lookup(provider, type_key)?;
        Resource::new(provider, kind, attributes)
    }
}

/// Resolve `attributes` using the default registry
pub fn resolve(provider: &str, attributes: AttributeBag) -> Result<Resource> {
    get_registry().resolve(provider, attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{PROJECT_ID_ATTR, RESOURCE_LOCATION_ATTR, RESOURCE_NAME_ATTR};

    #[test]
    fn test_empty_bag_is_invalid_input() {
        assert_eq!(
            resolve("gcp", AttributeBag::new()).unwrap_err(),
            ResourceError::InvalidInput(RESOURCE_TYPE_ATTR)
        );
    }

    #[test]
    fn test_blank_discriminator_is_invalid_input() {
        let attrs = AttributeBag::from([(RESOURCE_TYPE_ATTR, "  ")]);
        assert!(matches!(
            resolve("gcp", attrs),
            Err(ResourceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_discriminator_wins_over_other_errors() {
        let attrs = AttributeBag::from([(RESOURCE_NAME_ATTR, "my_resource")]);
        assert!(matches!(
            resolve("no-such-provider", attrs),
            Err(ResourceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_type() {
        let attrs = AttributeBag::from([
            (RESOURCE_TYPE_ATTR, "no.such.kind"),
            (RESOURCE_NAME_ATTR, "my_resource"),
            (PROJECT_ID_ATTR, "my_project"),
        ]);
        assert_eq!(
            resolve("gcp", attrs).unwrap_err(),
            ResourceError::UnknownType {
                provider: "gcp".to_string(),
                type_key: "no.such.kind".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_zone() {
        let attrs = AttributeBag::from([
            (RESOURCE_TYPE_ATTR, "compute.instances"),
            (RESOURCE_NAME_ATTR, "my_resource"),
            (PROJECT_ID_ATTR, "my_project"),
        ]);
        assert_eq!(
            resolve("gcp", attrs).unwrap_err(),
            ResourceError::MissingAttribute {
                kind: "gcp.compute.instances".to_string(),
                missing: vec![RESOURCE_LOCATION_ATTR.to_string()],
            }
        );
    }

    #[test]
    fn test_failure_does_not_affect_later_resolutions() {
        let _ = resolve("gcp", AttributeBag::from([(RESOURCE_TYPE_ATTR, "compute.instances")]));

        let attrs = AttributeBag::from([
            (RESOURCE_TYPE_ATTR, "compute.instances"),
            (RESOURCE_NAME_ATTR, "vm-1"),
            (RESOURCE_LOCATION_ATTR, "europe-west1-b"),
            (PROJECT_ID_ATTR, "p"),
        ]);
        let vm = resolve("gcp", attrs).unwrap();
        assert_eq!(
            vm.full_resource_name(),
            "//compute.googleapis.com/projects/p/zones/europe-west1-b/instances/vm-1"
        );
    }

    #[test]
    fn test_resolve_with_private_registry() {
        let registry = TypeRegistry::new();
        let attrs = AttributeBag::from([
            (RESOURCE_TYPE_ATTR, "storage.buckets"),
            (RESOURCE_NAME_ATTR, "b"),
        ]);
        assert!(matches!(
            registry.resolve("gcp", attrs),
            Err(ResourceError::UnknownType { .. })
        ));
    }
}
