//! Run configuration errors (SDCF)

define_domain_errors! {
    /// Errors loading `shakedown.toml` and its overrides.
    pub enum ConfigError {
        LoadFailed {
            code: (CF, Malformed, 1),
            message: "failed to load configuration from {file}: {reason}",
            help: "check shakedown.toml and the SHAKEDOWN_* environment variables",
            fields: { file: String, reason: String },
        },

        InvalidVersion {
            code: (CF, Malformed, 2),
            message: "'{given}' is not a valid version: {reason}",
            help: "versions use semantic versioning, e.g. '1045.0.0'",
            fields: { given: String, reason: String },
        },

        Invalid {
            code: (CF, Validation, 1),
            message: "invalid configuration: {reason}",
            fields: { reason: String },
        },

        /// Raised when selection needs a value no layer supplied.
        Missing {
            code: (CF, Missing, 1),
            message: "missing required setting '{key}'",
            help: "set it in shakedown.toml, as SHAKEDOWN_<KEY>, or on the command line",
            fields: { key: String },
        },
    }
}

impl ConfigError {
    pub fn load_failed(
        file: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::LoadFailed {
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_version(
        given: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidVersion {
            given: given.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid(reason: impl ToString) -> Self {
        Self::Invalid {
            reason: reason.to_string(),
        }
    }

    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }
}
