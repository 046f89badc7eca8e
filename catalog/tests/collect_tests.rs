use semver::Version;
use shakedown_catalog::{Registry, TestCluster, TestDeclaration, register_tests};

fn noop(_: &dyn TestCluster) {}

fn register_ignition(registry: &mut Registry) -> shakedown_catalog::Result<()> {
    registry.register(
        TestDeclaration::builder()
            .name("coreos.ignition.v1.empty.aws")
            .run(noop)
            .platforms(["aws"])
            .build(),
    )?;
    registry.register(
        TestDeclaration::builder()
            .name("coreos.ignition.v1.empty.gce")
            .run(noop)
            .platforms(["gce"])
            .min_version(Version::new(1045, 0, 0))
            .build(),
    )
}

fn register_basic(registry: &mut Registry) -> shakedown_catalog::Result<()> {
    registry.register(
        TestDeclaration::builder()
            .name("coreos.basic")
            .run(noop)
            .cluster_size(3)
            .build(),
    )
}

register_tests!(register_ignition);
register_tests!(register_basic);

#[test]
fn collects_every_module() {
    shakedown_testing::logging();

    let registry = Registry::collect().unwrap();

    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec![
            "coreos.basic",
            "coreos.ignition.v1.empty.aws",
            "coreos.ignition.v1.empty.gce",
        ]
    );
    assert_eq!(
        registry
            .get("coreos.basic")
            .map(|d| d.cluster_size),
        Some(3)
    );
}

#[test]
fn each_collect_builds_an_independent_registry() {
    let first = Registry::collect().unwrap();
    let mut second = Registry::collect().unwrap();

    second
        .register(
            TestDeclaration::builder()
                .name("coreos.extra")
                .run(noop)
                .build(),
        )
        .unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 4);
}

#[test]
fn collected_registry_filters() {
    let registry = Registry::collect().unwrap();

    let eligible: Vec<_> = registry
        .filter("gce", &Version::new(1044, 0, 0))
        .into_iter()
        .map(|d| d.name.as_str())
        .collect();

    assert_eq!(eligible, vec!["coreos.basic"]);
}
