//! Test registry errors (SDRG)
//! Raised while declaring tests or building selectors over the catalog.

define_domain_errors! {
    /// Test registry errors (SDRG domain)
    pub enum RegistryError {
        /// SDRG0001: Invalid name pattern
        InvalidPattern {
            code: (RG, Malformed, 1),
            message: "invalid test name pattern '{pattern}': {reason}",
            help: "patterns use shell glob syntax, e.g. 'coreos.ignition.*'",
            fields: { pattern: String, reason: String },
        },

        /// SDRG2001: Empty test name
        EmptyName {
            code: (RG, Validation, 1),
            message: "test names must not be empty",
            help: "give every declared test a dotted name such as 'coreos.basic'",
        },

        /// SDRG2002: Cluster size of zero
        InvalidClusterSize {
            code: (RG, Validation, 2),
            message: "test '{name}' declares a cluster size of {size}; at least one machine is required",
            fields: { name: String, size: usize },
        },

        /// SDRG2003: Empty version window
        InvalidVersionRange {
            code: (RG, Validation, 3),
            message: "test '{name}' has an empty version range: min version {min} is not below end version {end}",
            help: "the end version is exclusive and must be greater than the min version",
            fields: { name: String, min: String, end: String },
        },

        /// SDRG3001: Duplicate test name
        DuplicateName {
            code: (RG, Conflict, 1),
            message: "test '{name}' is already registered",
            help: "test names must be unique across every registered test module",
            fields: { name: String },
        },
    }
}

impl RegistryError {
    pub fn invalid_pattern(
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    pub fn empty_name() -> Self {
        Self::EmptyName {}
    }

    pub fn invalid_cluster_size(
        name: impl Into<String>,
        size: usize,
    ) -> Self {
        Self::InvalidClusterSize {
            name: name.into(),
            size,
        }
    }

    pub fn invalid_version_range(
        name: impl Into<String>,
        min: impl ToString,
        end: impl ToString,
    ) -> Self {
        Self::InvalidVersionRange {
            name: name.into(),
            min: min.to_string(),
            end: end.to_string(),
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
