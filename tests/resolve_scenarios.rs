//! Resolution scenarios for every built-in GCP resource kind
//!
//! These tests drive the public `resolve` entry point with the same attribute
//! bags a policy engine would pass and check the resulting type and name.

use rpe::resource::{get_registry, resolve, AttributeBag};
use rpe::ResourceError;

const TEST_PROJECT: &str = "my_project";
const TEST_RESOURCE_NAME: &str = "my_resource";

struct Case {
    input: AttributeBag,
    type_: &'static str,
    name: &'static str,
}

fn case(resource_type: &str, extra: &[(&str, &str)], type_: &'static str, name: &'static str) -> Case {
    let mut input = AttributeBag::from([
        ("resource_type", resource_type),
        ("resource_name", TEST_RESOURCE_NAME),
        ("project_id", TEST_PROJECT),
    ]);
    for (k, v) in extra {
        input.insert(*k, *v);
    }
    Case { input, type_, name }
}

fn test_cases() -> Vec<Case> {
    vec![
        case(
            "bigquery.datasets",
            &[],
            "gcp.bigquery.datasets",
            "//bigquery.googleapis.com/projects/my_project/datasets/my_resource",
        ),
        case(
            "compute.instances",
            &[("resource_location", "us-central1-a")],
            "gcp.compute.instances",
            "//compute.googleapis.com/projects/my_project/zones/us-central1-a/instances/my_resource",
        ),
        case(
            "cloudresourcemanager.projects",
            &[("resource_name", TEST_PROJECT)],
            "gcp.cloudresourcemanager.projects",
            "//cloudresourcemanager.googleapis.com/projects/my_project",
        ),
        case(
            "cloudresourcemanager.projects.iam",
            &[("resource_name", TEST_PROJECT)],
            "gcp.cloudresourcemanager.projects.iam",
            "//cloudresourcemanager.googleapis.com/projects/my_project",
        ),
        case(
            "pubsub.projects.subscriptions",
            &[],
            "gcp.pubsub.projects.subscriptions",
            "//pubsub.googleapis.com/projects/my_project/subscriptions/my_resource",
        ),
        case(
            "pubsub.projects.subscriptions.iam",
            &[],
            "gcp.pubsub.projects.subscriptions.iam",
            "//pubsub.googleapis.com/projects/my_project/subscriptions/my_resource",
        ),
        case(
            "pubsub.projects.topics",
            &[],
            "gcp.pubsub.projects.topics",
            "//pubsub.googleapis.com/projects/my_project/topics/my_resource",
        ),
        case(
            "pubsub.projects.topics.iam",
            &[],
            "gcp.pubsub.projects.topics.iam",
            "//pubsub.googleapis.com/projects/my_project/topics/my_resource",
        ),
        case(
            "sqladmin.instances",
            &[],
            "gcp.sqladmin.instances",
            "//sql.googleapis.com/projects/my_project/instances/my_resource",
        ),
        case(
            "storage.buckets",
            &[],
            "gcp.storage.buckets",
            "//storage.googleapis.com/buckets/my_resource",
        ),
        case(
            "storage.buckets.iam",
            &[],
            "gcp.storage.buckets.iam",
            "//storage.googleapis.com/buckets/my_resource",
        ),
    ]
}

mod factory_tests {
    use super::*;

    #[test]
    fn test_resource_type() {
        for case in test_cases() {
            let resource = resolve("gcp", case.input.clone()).unwrap();
            assert_eq!(resource.resource_type(), case.type_);
        }
    }

    #[test]
    fn test_full_resource_name() {
        for case in test_cases() {
            let resource = resolve("gcp", case.input.clone()).unwrap();
            assert_eq!(
                resource.full_resource_name(),
                case.name,
                "wrong name for {}",
                case.type_
            );
        }
    }

    #[test]
    fn test_cases_cover_every_registered_type() {
        let mut covered: Vec<&str> = test_cases()
            .iter()
            .map(|c| c.type_.trim_start_matches("gcp."))
            .collect();
        covered.sort_unstable();
        assert_eq!(covered, get_registry().type_keys("gcp"));
    }

    #[test]
    fn test_empty_bag_is_invalid_input() {
        assert!(matches!(
            resolve("gcp", AttributeBag::new()),
            Err(ResourceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_type() {
        let attrs = AttributeBag::from([
            ("resource_type", "no.such.kind"),
            ("resource_name", TEST_RESOURCE_NAME),
            ("project_id", TEST_PROJECT),
        ]);
        assert!(matches!(
            resolve("gcp", attrs),
            Err(ResourceError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_empty_project_is_missing() {
        let attrs = AttributeBag::from([
            ("resource_type", "pubsub.projects.topics"),
            ("resource_name", TEST_RESOURCE_NAME),
            ("project_id", ""),
        ]);
        match resolve("gcp", attrs) {
            Err(ResourceError::MissingAttribute { kind, missing }) => {
                assert_eq!(kind, "gcp.pubsub.projects.topics");
                assert_eq!(missing, vec!["project_id".to_string()]);
            }
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn test_project_name_must_match_project_id() {
        for resource_type in ["cloudresourcemanager.projects", "cloudresourcemanager.projects.iam"] {
            let attrs = AttributeBag::from([
                ("resource_type", resource_type),
                ("resource_name", "other_project"),
                ("project_id", TEST_PROJECT),
            ]);
            match resolve("gcp", attrs) {
                Err(ResourceError::InvalidAttribute { name, .. }) => {
                    assert_eq!(name, "resource_name", "{}", resource_type)
                }
                other => panic!("expected InvalidAttribute for {}, got {:?}", resource_type, other),
            }
        }
    }

    #[test]
    fn test_path_separators_do_not_collide() {
        let nested_project = AttributeBag::from([
            ("resource_type", "pubsub.projects.topics"),
            ("resource_name", "c"),
            ("project_id", "a/topics/b"),
        ]);
        let nested_name = AttributeBag::from([
            ("resource_type", "pubsub.projects.topics"),
            ("resource_name", "b/topics/c"),
            ("project_id", "a"),
        ]);
        assert!(matches!(
            resolve("gcp", nested_project),
            Err(ResourceError::InvalidAttribute { .. })
        ));
        assert!(matches!(
            resolve("gcp", nested_name),
            Err(ResourceError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_bucket_ignores_project() {
        let attrs = AttributeBag::from([
            ("resource_type", "storage.buckets"),
            ("resource_name", TEST_RESOURCE_NAME),
        ]);
        let bucket = resolve("gcp", attrs).unwrap();
        assert_eq!(
            bucket.full_resource_name(),
            "//storage.googleapis.com/buckets/my_resource"
        );
    }
}

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_parallel_resolution_is_consistent() {
        let cases = test_cases();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        cases
                            .iter()
                            .map(|c| {
                                resolve("gcp", c.input.clone())
                                    .map(|r| r.full_resource_name().to_string())
                            })
                            .collect::<Result<Vec<_>, _>>()
                    })
                })
                .collect();

            for handle in handles {
                let names = handle.join().unwrap().unwrap();
                let expected: Vec<&str> = cases.iter().map(|c| c.name).collect();
                assert_eq!(names, expected);
            }
        });
    }
}
