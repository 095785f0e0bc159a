//! Resource Kinds
//!
//! A resource kind knows which attributes it needs and how to render its
//! full resource name from them. Provider modules implement [`ResourceKind`]
//! for a closed set of variants and register each one at startup.

use super::attributes::{
    AttributeBag, PROJECT_ID_ATTR, RESOURCE_LOCATION_ATTR, RESOURCE_NAME_ATTR,
};
use crate::error::{ResourceError, Result};
use std::fmt;

/// Path segment used for location-scoped resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationScope {
    Zone,
    Region,
}

impl LocationScope {
    pub fn segment(self) -> &'static str {
        match self {
            LocationScope::Zone => "zones",
            LocationScope::Region => "regions",
        }
    }
}

/// Shape of a full resource name
///
/// `api_host` and `collection` are fixed per kind; only attribute values are
/// substituted at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTemplate {
    /// `//{api_host}/{collection}/{name}`
    Flat {
        api_host: &'static str,
        collection: &'static str,
    },
    /// `//{api_host}/projects/{project_id}/{collection}/{name}`
    Project {
        api_host: &'static str,
        collection: &'static str,
    },
    /// `//{api_host}/projects/{project_id}/{zones|regions}/{location}/{collection}/{name}`
    Location {
        api_host: &'static str,
        scope: LocationScope,
        collection: &'static str,
    },
    /// `//{api_host}/projects/{project_id}`
    SelfProject { api_host: &'static str },
}

impl NameTemplate {
    pub fn api_host(&self) -> &'static str {
        match *self {
            NameTemplate::Flat { api_host, .. }
            | NameTemplate::Project { api_host, .. }
            | NameTemplate::Location { api_host, .. }
            | NameTemplate::SelfProject { api_host } => api_host,
        }
    }

    /// Attributes this shape substitutes, in declaration order
    pub fn required_attributes(&self) -> &'static [&'static str] {
        match self {
            NameTemplate::Flat { .. } => &[RESOURCE_NAME_ATTR],
            NameTemplate::Project { .. } | NameTemplate::SelfProject { .. } => {
                &[RESOURCE_NAME_ATTR, PROJECT_ID_ATTR]
            }
            NameTemplate::Location { .. } => {
                &[RESOURCE_NAME_ATTR, RESOURCE_LOCATION_ATTR, PROJECT_ID_ATTR]
            }
        }
    }

    /// Check values that would make the rendered name ambiguous
    ///
    /// Substituted values must be single path segments without surrounding
    /// whitespace, and a project's own name must be its project id.
    pub fn check_values(&self, attributes: &AttributeBag) -> Result<()> {
        for name in self.required_attributes() {
            let Some(value) = attributes.get(name) else {
                continue;
            };
            if value.contains('/') {
                return Err(ResourceError::InvalidAttribute {
                    name: name.to_string(),
                    reason: format!("`{}` contains a path separator", value),
                });
            }
            if value.trim() != value {
                return Err(ResourceError::InvalidAttribute {
                    name: name.to_string(),
                    reason: format!("`{}` has surrounding whitespace", value),
                });
            }
        }

        if let NameTemplate::SelfProject { .. } = self {
            let resource_name = attributes.get(RESOURCE_NAME_ATTR);
            let project_id = attributes.get(PROJECT_ID_ATTR);
            if resource_name != project_id {
                return Err(ResourceError::InvalidAttribute {
                    name: RESOURCE_NAME_ATTR.to_string(),
                    reason: format!(
                        "`{}` does not match project_id `{}`",
                        resource_name.unwrap_or_default(),
                        project_id.unwrap_or_default()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Render the full resource name
    ///
    /// Callers validate `attributes` first; an absent value renders empty.
    pub fn render(&self, attributes: &AttributeBag) -> String {
        let value = |name: &str| attributes.get(name).unwrap_or_default();

        match *self {
            NameTemplate::Flat {
                api_host,
                collection,
            } => format!("//{}/{}/{}", api_host, collection, value(RESOURCE_NAME_ATTR)),
            NameTemplate::Project {
                api_host,
                collection,
            } => format!(
                "//{}/projects/{}/{}/{}",
                api_host,
                value(PROJECT_ID_ATTR),
                collection,
                value(RESOURCE_NAME_ATTR)
            ),
            NameTemplate::Location {
                api_host,
                scope,
                collection,
            } => format!(
                "//{}/projects/{}/{}/{}/{}/{}",
                api_host,
                value(PROJECT_ID_ATTR),
                scope.segment(),
                value(RESOURCE_LOCATION_ATTR),
                collection,
                value(RESOURCE_NAME_ATTR)
            ),
            NameTemplate::SelfProject { api_host } => {
                format!("//{}/projects/{}", api_host, value(PROJECT_ID_ATTR))
            }
        }
    }
}

/// Naming rule for one kind of resource
pub trait ResourceKind: fmt::Debug + Send + Sync {
    /// Dotted key unique within the provider, e.g. `compute.instances`
    fn type_key(&self) -> &'static str;

    fn name_template(&self) -> NameTemplate;

    /// Kind whose identity this policy view shares, if any
    fn iam_parent(&self) -> Option<&'static dyn ResourceKind> {
        None
    }

    fn required_attributes(&self) -> &'static [&'static str] {
        self.name_template().required_attributes()
    }

    /// Check that every required attribute is present, non-empty and usable
    /// as a name segment
    fn validate(&self, provider: &str, attributes: &AttributeBag) -> Result<()> {
        let missing: Vec<String> = self
            .required_attributes()
            .iter()
            .filter(|name| attributes.get_non_empty(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ResourceError::MissingAttribute {
                kind: format!("{}.{}", provider, self.type_key()),
                missing,
            });
        }

        self.name_template().check_values(attributes)
    }

    fn full_resource_name(&self, attributes: &AttributeBag) -> String {
        self.name_template().render(attributes)
    }
}
