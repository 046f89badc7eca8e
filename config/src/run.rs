use semver::Version;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{Error, NewForConfig};

fn default_platform() -> String {
    "qemu".into()
}

fn default_pattern() -> String {
    "*".into()
}

fn validate_pattern(pattern: &str) -> Result<(), ValidationError> {
    glob::Pattern::new(pattern)
        .map(|_| ())
        .map_err(|e| {
            let mut err = ValidationError::new("glob");
            err.message = Some(e.msg.into());
            err
        })
}

/// Where and what to select tests for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RunConfig {
    #[serde(default = "default_platform")]
    #[validate(length(min = 1))]
    pub platform: String,

    /// Version of the software under test; required before selection.
    #[serde(default)]
    pub version: Option<Version>,

    #[serde(default = "default_pattern")]
    #[validate(custom(function = "validate_pattern"))]
    pub pattern: String,
}

impl NewForConfig for RunConfig {
    const NAME: &'static str = "shakedown";
    const ENV: &'static str = "SHAKEDOWN";
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            version: None,
            pattern: default_pattern(),
        }
    }
}

/// Command line values, which win over file and environment settings.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub platform: Option<String>,
    pub version: Option<String>,
    pub pattern: Option<String>,
}

impl RunConfig {
    pub fn with_overrides(
        mut self,
        overrides: Overrides,
    ) -> crate::Result<Self> {
        if let Some(platform) = overrides.platform {
            self.platform = platform;
        }

        if let Some(given) = overrides.version {
            let version =
                Version::parse(&given).map_err(|source| Error::Version { given, source })?;
            self.version = Some(version);
        }

        if let Some(pattern) = overrides.pattern {
            self.pattern = pattern;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn version(&self) -> crate::Result<&Version> {
        self.version
            .as_ref()
            .ok_or(Error::Missing("version"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn load(toml: Option<&str>) -> crate::Result<RunConfig> {
        let dir = tempfile::tempdir().unwrap();
        if let Some(toml) = toml {
            std::fs::write(dir.path().join("shakedown.toml"), toml).unwrap();
        }
        RunConfig::new(Some(dir.path().to_string_lossy()))
    }

    #[test]
    fn defaults_without_file() {
        let config = load(None).unwrap();
        assert_eq!(config, RunConfig::default());
        assert!(matches!(config.version(), Err(Error::Missing("version"))));
    }

    #[test]
    fn reads_file() {
        let config = load(Some(
            r#"
platform = "gce"
version = "1045.0.0"
pattern = "coreos.ignition.*"
"#,
        ))
        .unwrap();

        assert_eq!(config.platform, "gce");
        assert_eq!(config.version().unwrap(), &Version::new(1045, 0, 0));
        assert_eq!(config.pattern, "coreos.ignition.*");
    }

    #[test]
    fn file_with_bad_pattern_fails_validation() {
        let err = load(Some(r#"pattern = "coreos.[""#)).unwrap_err();
        assert!(matches!(err, Error::WithSource { ref err, .. } if matches!(**err, Error::ValidationErrors(_))));
    }

    #[test]
    fn overrides_win() {
        let config = load(Some(r#"platform = "gce""#))
            .unwrap()
            .with_overrides(Overrides {
                platform: Some("aws".into()),
                version: Some("1122.0.0".into()),
                pattern: None,
            })
            .unwrap();

        assert_eq!(config.platform, "aws");
        assert_eq!(config.version, Some(Version::new(1122, 0, 0)));
        assert_eq!(config.pattern, "*");
    }

    #[test_case(Overrides { version: Some("1045".into()), ..Default::default() }; "short version")]
    #[test_case(Overrides { platform: Some("".into()), ..Default::default() }; "empty platform")]
    #[test_case(Overrides { pattern: Some("[".into()), ..Default::default() }; "bad pattern")]
    fn invalid_overrides(overrides: Overrides) {
        assert!(
            RunConfig::default()
                .with_overrides(overrides)
                .is_err()
        );
    }
}
