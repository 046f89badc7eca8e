use std::collections::BTreeSet;

use semver::Version;

/// Handle to the machines provisioned for a test run.
///
/// The runner owns the full shape of a cluster; the catalog only needs what
/// a test body can rely on regardless of platform.
pub trait TestCluster {
    /// The platform the machines were provisioned on.
    fn platform(&self) -> &str;

    /// Number of machines in the cluster.
    fn size(&self) -> usize;
}

/// Entry point of a declared test.
pub type TestFn = fn(&dyn TestCluster);

/// The set of platforms a test may run on. Empty means unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Platforms(BTreeSet<String>);

impl Platforms {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn allows(
        &self,
        platform: &str,
    ) -> bool {
        self.0.is_empty() || self.0.contains(platform)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Platforms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Platforms {
    fn from(value: [&str; N]) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<String>> for Platforms {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<&[&str]> for Platforms {
    fn from(value: &[&str]) -> Self {
        value.iter().copied().collect()
    }
}

/// A named test, the environment it requires, and its entry point.
///
/// ```
/// use shakedown_catalog::{TestCluster, TestDeclaration};
///
/// fn empty(_: &dyn TestCluster) {}
///
/// let decl = TestDeclaration::builder()
///     .name("coreos.ignition.v1.empty.gce")
///     .run(empty)
///     .platforms(["gce"])
///     .min_version(semver::Version::new(1045, 0, 0))
///     .build();
///
/// assert_eq!(decl.cluster_size, 1);
/// assert!(decl.platforms.allows("gce"));
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct TestDeclaration {
    #[builder(into)]
    pub name: String,

    pub run: TestFn,

    #[builder(default, into)]
    pub platforms: Platforms,

    /// Inclusive version floor.
    pub min_version: Option<Version>,

    /// Exclusive version ceiling.
    pub end_version: Option<Version>,

    #[builder(default = 1)]
    pub cluster_size: usize,
}

impl TestDeclaration {
    pub fn runs_on(
        &self,
        platform: &str,
    ) -> bool {
        self.platforms.allows(platform)
    }

    /// Whether `version` lies in `[min_version, end_version)`.
    pub fn supports_version(
        &self,
        version: &Version,
    ) -> bool {
        let above_floor = self
            .min_version
            .as_ref()
            .is_none_or(|min| min <= version);
        let below_ceiling = self
            .end_version
            .as_ref()
            .is_none_or(|end| version < end);

        above_floor && below_ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn noop(_: &dyn TestCluster) {}

    fn windowed(
        min: Option<Version>,
        end: Option<Version>,
    ) -> TestDeclaration {
        TestDeclaration::builder()
            .name("window")
            .run(noop)
            .maybe_min_version(min)
            .maybe_end_version(end)
            .build()
    }

    #[test]
    fn builder_defaults() {
        let decl = TestDeclaration::builder()
            .name("coreos.basic")
            .run(noop)
            .build();

        assert_eq!(decl.cluster_size, 1);
        assert!(decl.platforms.is_unrestricted());
        assert!(decl.min_version.is_none());
        assert!(decl.end_version.is_none());
    }

    #[test_case("aws", true; "listed platform")]
    #[test_case("gce", false; "unlisted platform")]
    #[test_case("", false; "empty platform")]
    fn restricted_platforms(
        platform: &str,
        expected: bool,
    ) {
        let decl = TestDeclaration::builder()
            .name("coreos.ignition.v1.empty.aws")
            .run(noop)
            .platforms(["aws"])
            .build();

        assert_eq!(decl.runs_on(platform), expected);
    }

    #[test]
    fn unrestricted_platforms_allow_anything() {
        let decl = windowed(None, None);
        assert!(decl.runs_on("aws"));
        assert!(decl.runs_on("qemu"));
    }

    #[test_case(None, None, "0.0.1", true; "no bounds")]
    #[test_case(Some("1045.0.0"), None, "1044.0.0", false; "below floor")]
    #[test_case(Some("1045.0.0"), None, "1045.0.0", true; "at floor")]
    #[test_case(Some("1045.0.0"), None, "1122.2.0", true; "above floor")]
    #[test_case(None, Some("1200.0.0"), "1199.9.9", true; "below ceiling")]
    #[test_case(None, Some("1200.0.0"), "1200.0.0", false; "ceiling is exclusive")]
    #[test_case(Some("1045.0.0"), Some("1200.0.0"), "1100.0.0", true; "inside window")]
    fn version_window(
        min: Option<&str>,
        end: Option<&str>,
        version: &str,
        expected: bool,
    ) {
        let parse = |v: &str| Version::parse(v).unwrap();
        let decl = windowed(min.map(parse), end.map(parse));

        assert_eq!(decl.supports_version(&parse(version)), expected);
    }

    #[test]
    fn platforms_from_conversions() {
        let from_vec: Platforms = vec!["aws".to_string(), "gce".to_string()].into();
        let from_slice: Platforms = (&["gce", "aws"][..]).into();

        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec.iter().collect::<Vec<_>>(), vec!["aws", "gce"]);
    }
}
