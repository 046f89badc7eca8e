//! Resource cleanup errors (SDCL)

define_domain_errors! {
    /// Resource cleanup errors (SDCL domain)
    pub enum CleanupError {
        /// SDCL5001: A resource failed to release
        ReleaseFailed {
            code: (CL, Release, 1),
            message: "failed to release resource: {reason}",
            fields: { reason: String },
        },

        /// SDCL7001: A resource did not release within its budget
        ReleaseTimedOut {
            code: (CL, Timeout, 1),
            message: "resource #{index} did not release within {millis}ms",
            help: "the release was abandoned; the resource may still be held",
            fields: { index: usize, millis: u128 },
        },

        /// SDCL9001: The release task itself failed
        ReleaseAborted {
            code: (CL, Internal, 1),
            message: "release of resource #{index} aborted: {reason}",
            fields: { index: usize, reason: String },
        },
    }
}

impl CleanupError {
    pub fn release_failed(reason: impl ToString) -> Self {
        Self::ReleaseFailed {
            reason: reason.to_string(),
        }
    }

    pub fn timed_out(
        index: usize,
        timeout: std::time::Duration,
    ) -> Self {
        Self::ReleaseTimedOut {
            index,
            millis: timeout.as_millis(),
        }
    }

    pub fn aborted(
        index: usize,
        reason: impl ToString,
    ) -> Self {
        Self::ReleaseAborted {
            index,
            reason: reason.to_string(),
        }
    }
}
