use semver::Version;
use serde::{Deserialize, Serialize};

use crate::TestDeclaration;

/// Serializable view of a declaration, without its entry point.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TestSummary {
    pub name: String,

    /// Empty when the test runs on every platform.
    pub platforms: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<Version>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_version: Option<Version>,

    pub cluster_size: usize,
}

impl From<&TestDeclaration> for TestSummary {
    fn from(decl: &TestDeclaration) -> Self {
        Self {
            name: decl.name.clone(),
            platforms: decl
                .platforms
                .iter()
                .map(String::from)
                .collect(),
            min_version: decl.min_version.clone(),
            end_version: decl.end_version.clone(),
            cluster_size: decl.cluster_size,
        }
    }
}
