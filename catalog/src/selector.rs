use glob::Pattern;
use semver::Version;

use crate::{RegistryError, TestDeclaration};

/// A query over the catalog: which declared tests may run on this platform
/// at this version, restricted to names matching a glob.
#[derive(Debug, Clone)]
pub struct Selector {
    /// `None` selects every name.
    pattern: Option<Pattern>,
    platform: String,
    version: Version,
}

impl Selector {
    pub fn new(
        pattern: &str,
        platform: impl Into<String>,
        version: Version,
    ) -> crate::Result<Self> {
        let pattern = Pattern::new(pattern)
            .map_err(|e| RegistryError::invalid_pattern(pattern, e.msg))?;

        Ok(Self {
            pattern: Some(pattern),
            platform: platform.into(),
            version,
        })
    }

    /// Selects every test name.
    pub fn any(
        platform: impl Into<String>,
        version: Version,
    ) -> Self {
        Self {
            pattern: None,
            platform: platform.into(),
            version,
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern
            .as_ref()
            .map_or("*", Pattern::as_str)
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// A test named exactly by the pattern was asked for explicitly and
    /// skips the version window; the platform restriction always applies.
    pub fn matches(
        &self,
        decl: &TestDeclaration,
    ) -> bool {
        let explicit = match &self.pattern {
            Some(pattern) if !pattern.matches(&decl.name) => return false,
            Some(pattern) => pattern.as_str() == decl.name,
            None => false,
        };
        if !explicit && !decl.supports_version(&self.version) {
            return false;
        }

        decl.runs_on(&self.platform)
    }
}
