//! Internal errors (SDIN)
//! Harness bugs, not user errors.

define_domain_errors! {
    /// Internal errors (SDIN domain)
    pub enum InternalError {
        /// SDIN9001: Internal error (generic)
        InternalError {
            code: (IN, Internal, 1),
            message: "internal error: {reason}",
            help: "this is a harness bug - please report it",
            fields: { reason: String },
        },
    }
}

impl InternalError {
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::InternalError {
            reason: reason.into(),
        }
    }
}
