use std::collections::{BTreeMap, btree_map::Entry};

use semver::Version;

use crate::{Registration, RegistryError, Selector, TestDeclaration};

/// Catalog of declared tests, keyed by unique name.
///
/// Entries are write-once: a name can be registered a single time and is
/// never replaced or removed. Reads take `&self`, so a built registry can be
/// shared freely between threads.
#[derive(Debug, Default)]
pub struct Registry {
    tests: BTreeMap<String, TestDeclaration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from every test module linked into the binary.
    ///
    /// Fails on the first invalid or duplicate declaration.
    pub fn collect() -> crate::Result<Self> {
        let mut registry = Self::new();

        for registration in inventory::iter::<Registration> {
            registration.declare(&mut registry)?;
        }

        tracing::debug!("collected {} test declarations", registry.len());

        Ok(registry)
    }

    pub fn register(
        &mut self,
        decl: TestDeclaration,
    ) -> crate::Result<()> {
        validate(&decl)?;

        match self.tests.entry(decl.name.clone()) {
            Entry::Occupied(existing) => {
                tracing::error!("test '{}' registered twice", existing.key());
                Err(RegistryError::duplicate_name(existing.key()))
            },
            Entry::Vacant(slot) => {
                tracing::debug!(
                    name = %decl.name,
                    cluster_size = decl.cluster_size,
                    "registered test"
                );
                slot.insert(decl);
                Ok(())
            },
        }
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&TestDeclaration> {
        self.tests.get(name)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.tests.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Declarations in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TestDeclaration> {
        self.tests.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.keys().map(String::as_str)
    }

    /// Declarations eligible for `platform` at `version`, in name order.
    pub fn filter(
        &self,
        platform: &str,
        version: &Version,
    ) -> Vec<&TestDeclaration> {
        self.select(&Selector::any(platform, version.clone()))
    }

    /// Declarations matched by `selector`, in name order.
    pub fn select(
        &self,
        selector: &Selector,
    ) -> Vec<&TestDeclaration> {
        let selected: Vec<_> = self
            .iter()
            .filter(|decl| selector.matches(decl))
            .collect();

        tracing::trace!(
            pattern = selector.pattern(),
            platform = selector.platform(),
            version = %selector.version(),
            "selected {} of {} tests",
            selected.len(),
            self.len()
        );

        selected
    }
}

fn validate(decl: &TestDeclaration) -> crate::Result<()> {
    if decl.name.is_empty() {
        return Err(RegistryError::empty_name());
    }

    if decl.cluster_size == 0 {
        return Err(RegistryError::invalid_cluster_size(
            &decl.name,
            decl.cluster_size,
        ));
    }

    if let (Some(min), Some(end)) = (&decl.min_version, &decl.end_version)
        && min >= end
    {
        return Err(RegistryError::invalid_version_range(&decl.name, min, end));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestCluster;

    fn noop(_: &dyn TestCluster) {}

    fn decl(name: &str) -> TestDeclaration {
        TestDeclaration::builder()
            .name(name)
            .run(noop)
            .build()
    }

    fn ignition_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(
                TestDeclaration::builder()
                    .name("coreos.ignition.v1.empty.aws")
                    .run(noop)
                    .platforms(["aws"])
                    .build(),
            )
            .unwrap();
        registry
            .register(
                TestDeclaration::builder()
                    .name("coreos.ignition.v1.empty.gce")
                    .run(noop)
                    .platforms(["gce"])
                    .min_version(Version::new(1045, 0, 0))
                    .build(),
            )
            .unwrap();
        registry
            .register(decl("coreos.basic"))
            .unwrap();
        registry
    }

    fn names<'a>(decls: Vec<&'a TestDeclaration>) -> Vec<&'a str> {
        decls
            .into_iter()
            .map(|d| d.name.as_str())
            .collect()
    }

    #[test]
    fn register_and_lookup() {
        shakedown_testing::logging();

        let registry = ignition_registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("coreos.basic"));
        assert_eq!(
            registry
                .get("coreos.ignition.v1.empty.gce")
                .and_then(|d| d.min_version.clone()),
            Some(Version::new(1045, 0, 0))
        );
        assert!(registry.get("coreos.missing").is_none());
    }

    #[test]
    fn duplicate_name_is_rejected_and_original_kept() {
        let mut registry = Registry::new();
        registry
            .register(decl("coreos.basic"))
            .unwrap();

        let dup = TestDeclaration::builder()
            .name("coreos.basic")
            .run(noop)
            .cluster_size(3)
            .build();

        assert_eq!(
            registry.register(dup),
            Err(RegistryError::duplicate_name("coreos.basic"))
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry
                .get("coreos.basic")
                .map(|d| d.cluster_size),
            Some(1)
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.register(decl("")),
            Err(RegistryError::empty_name())
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn zero_cluster_size_is_rejected() {
        let mut registry = Registry::new();
        let err = registry
            .register(
                TestDeclaration::builder()
                    .name("coreos.cluster")
                    .run(noop)
                    .cluster_size(0)
                    .build(),
            )
            .unwrap_err();

        assert_eq!(err, RegistryError::invalid_cluster_size("coreos.cluster", 0));
    }

    #[test]
    fn empty_version_window_is_rejected() {
        let mut registry = Registry::new();
        let err = registry
            .register(
                TestDeclaration::builder()
                    .name("coreos.window")
                    .run(noop)
                    .min_version(Version::new(1200, 0, 0))
                    .end_version(Version::new(1200, 0, 0))
                    .build(),
            )
            .unwrap_err();

        assert_eq!(err.error_code().to_string(), "SDRG2003");
    }

    #[test]
    fn platform_filter() {
        let registry = ignition_registry();

        for version in ["1000.0.0", "1045.0.0", "2000.1.0"] {
            let version = Version::parse(version).unwrap();

            let gce = names(registry.filter("gce", &version));
            assert!(!gce.contains(&"coreos.ignition.v1.empty.aws"));

            let aws = names(registry.filter("aws", &version));
            assert!(aws.contains(&"coreos.ignition.v1.empty.aws"));
            assert!(aws.contains(&"coreos.basic"));
        }
    }

    #[test]
    fn version_floor() {
        let registry = ignition_registry();

        let before = names(registry.filter("gce", &Version::new(1044, 0, 0)));
        assert_eq!(before, vec!["coreos.basic"]);

        let at = names(registry.filter("gce", &Version::new(1045, 0, 0)));
        assert_eq!(at, vec!["coreos.basic", "coreos.ignition.v1.empty.gce"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let registry = ignition_registry();
        let version = Version::new(1045, 0, 0);

        let first = names(registry.filter("gce", &version));
        let second = names(registry.filter("gce", &version));
        assert_eq!(first, second);
    }

    #[test]
    fn select_with_exact_name_skips_version_floor() {
        let registry = ignition_registry();
        let selector = Selector::new(
            "coreos.ignition.v1.empty.gce",
            "gce",
            Version::new(1000, 0, 0),
        )
        .unwrap();

        assert_eq!(
            names(registry.select(&selector)),
            vec!["coreos.ignition.v1.empty.gce"]
        );
    }

    #[test]
    fn names_are_sorted() {
        let registry = ignition_registry();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![
                "coreos.basic",
                "coreos.ignition.v1.empty.aws",
                "coreos.ignition.v1.empty.gce",
            ]
        );
    }
}
