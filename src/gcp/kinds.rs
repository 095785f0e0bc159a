//! GCP Resource Kinds
//!
//! The closed set of GCP resource kinds and their full-name conventions.
//! See <https://cloud.google.com/apis/design/resource_names#full_resource_name>.

use crate::resource::{LocationScope, NameTemplate, ResourceKind};

const BIGQUERY_HOST: &str = "bigquery.googleapis.com";
const COMPUTE_HOST: &str = "compute.googleapis.com";
const RESOURCE_MANAGER_HOST: &str = "cloudresourcemanager.googleapis.com";
const PUBSUB_HOST: &str = "pubsub.googleapis.com";
const SQL_HOST: &str = "sql.googleapis.com";
const STORAGE_HOST: &str = "storage.googleapis.com";

/// A GCP resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GcpResourceKind {
    BigqueryDataset,
    ComputeInstance,
    Project,
    ProjectIam,
    PubsubSubscription,
    PubsubSubscriptionIam,
    PubsubTopic,
    PubsubTopicIam,
    SqlInstance,
    StorageBucket,
    StorageBucketIam,
}

/// Every GCP kind, registered at startup
pub static GCP_KINDS: [GcpResourceKind; 11] = [
    GcpResourceKind::BigqueryDataset,
    GcpResourceKind::ComputeInstance,
    GcpResourceKind::Project,
    GcpResourceKind::ProjectIam,
    GcpResourceKind::PubsubSubscription,
    GcpResourceKind::PubsubSubscriptionIam,
    GcpResourceKind::PubsubTopic,
    GcpResourceKind::PubsubTopicIam,
    GcpResourceKind::SqlInstance,
    GcpResourceKind::StorageBucket,
    GcpResourceKind::StorageBucketIam,
];

impl GcpResourceKind {
    /// Kind whose name an IAM policy view shares
    pub fn parent(self) -> Option<&'static GcpResourceKind> {
        match self {
            GcpResourceKind::ProjectIam => Some(&GcpResourceKind::Project),
            GcpResourceKind::PubsubSubscriptionIam => Some(&GcpResourceKind::PubsubSubscription),
            GcpResourceKind::PubsubTopicIam => Some(&GcpResourceKind::PubsubTopic),
            GcpResourceKind::StorageBucketIam => Some(&GcpResourceKind::StorageBucket),
            _ => None,
        }
    }
}

impl ResourceKind for GcpResourceKind {
    fn type_key(&self) -> &'static str {
        match self {
            GcpResourceKind::BigqueryDataset => "bigquery.datasets",
            GcpResourceKind::ComputeInstance => "compute.instances",
            GcpResourceKind::Project => "cloudresourcemanager.projects",
            GcpResourceKind::ProjectIam => "cloudresourcemanager.projects.iam",
            GcpResourceKind::PubsubSubscription => "pubsub.projects.subscriptions",
            GcpResourceKind::PubsubSubscriptionIam => "pubsub.projects.subscriptions.iam",
            GcpResourceKind::PubsubTopic => "pubsub.projects.topics",
            GcpResourceKind::PubsubTopicIam => "pubsub.projects.topics.iam",
            GcpResourceKind::SqlInstance => "sqladmin.instances",
            GcpResourceKind::StorageBucket => "storage.buckets",
            GcpResourceKind::StorageBucketIam => "storage.buckets.iam",
        }
    }

    fn name_template(&self) -> NameTemplate {
        match self {
            GcpResourceKind::BigqueryDataset => NameTemplate::Project {
                api_host: BIGQUERY_HOST,
                collection: "datasets",
            },
            GcpResourceKind::ComputeInstance => NameTemplate::Location {
                api_host: COMPUTE_HOST,
                scope: LocationScope::Zone,
                collection: "instances",
            },
            GcpResourceKind::Project => NameTemplate::SelfProject {
                api_host: RESOURCE_MANAGER_HOST,
            },
            GcpResourceKind::PubsubSubscription => NameTemplate::Project {
                api_host: PUBSUB_HOST,
                collection: "subscriptions",
            },
            GcpResourceKind::PubsubTopic => NameTemplate::Project {
                api_host: PUBSUB_HOST,
                collection: "topics",
            },
            GcpResourceKind::SqlInstance => NameTemplate::Project {
                api_host: SQL_HOST,
                collection: "instances",
            },
            GcpResourceKind::StorageBucket => NameTemplate::Flat {
                api_host: STORAGE_HOST,
                collection: "buckets",
            },
            // IAM policy views share their parent's name
            GcpResourceKind::ProjectIam => GcpResourceKind::Project.name_template(),
            GcpResourceKind::PubsubSubscriptionIam => {
                GcpResourceKind::PubsubSubscription.name_template()
            }
            GcpResourceKind::PubsubTopicIam => GcpResourceKind::PubsubTopic.name_template(),
            GcpResourceKind::StorageBucketIam => GcpResourceKind::StorageBucket.name_template(),
        }
    }

    fn iam_parent(&self) -> Option<&'static dyn ResourceKind> {
        self.parent().map(|parent| parent as &'static dyn ResourceKind)
    }
}
