/// Declares a coded error enum.
///
/// Every variant names its code as `(domain, category, sequence)` and a
/// message template. Fields listed under `fields` must all appear in the
/// template. `help` and `severity` are optional; severity defaults to
/// `Error`.
#[macro_export]
macro_rules! define_domain_errors {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident {
                    code: ($domain:ident, $category:ident, $seq:literal),
                    message: $msg:literal
                    $(, help: $help:literal)?
                    $(, severity: $severity:ident)?
                    $(, fields: { $($field:ident: $ftype:ty),* $(,)? })?
                    $(,)?
                }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant {
                    $($($field: $ftype,)*)?
                },
            )*
        }

        impl $name {
            pub const fn error_code(&self) -> $crate::ErrorCode {
                match self {
                    $(
                        Self::$variant { .. } => $crate::ErrorCode::new(
                            $crate::Domain::$domain,
                            $crate::Category::$category,
                            $seq
                        ),
                    )*
                }
            }

            pub fn message(&self) -> String {
                match self {
                    $(
                        Self::$variant { $($($field,)*)? } => {
                            format!($msg $(, $($field = $field),*)?)
                        }
                    )*
                }
            }

            pub fn help_text(&self) -> Option<&'static str> {
                match self {
                    $(
                        Self::$variant { .. } => $crate::define_domain_errors!(@help $($help)?),
                    )*
                }
            }

            pub fn severity(&self) -> $crate::Severity {
                match self {
                    $(
                        Self::$variant { .. } => $crate::define_domain_errors!(@severity $($severity)?),
                    )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.message())
            }
        }

        impl std::error::Error for $name {}
    };

    (@help) => { None };
    (@help $help:literal) => { Some($help) };
    (@severity) => { $crate::Severity::Error };
    (@severity $severity:ident) => { $crate::Severity::$severity };
}

#[cfg(test)]
mod tests {
    use crate::Severity;

    define_domain_errors! {
        pub enum MachineError {
            NoQuota {
                code: (CL, Missing, 1),
                message: "no quota left for machines",
            },

            BootFailed {
                code: (CL, Release, 2),
                message: "machine {id} on {platform} failed to boot",
                help: "check the platform console output",
                fields: { id: String, platform: String },
            },

            /// Leaked but reclaimed by the platform later.
            Leaked {
                code: (CL, Timeout, 3),
                message: "machine {id} outlived its test",
                severity: Warning,
                fields: { id: String },
            },
        }
    }

    fn boot_failed() -> MachineError {
        MachineError::BootFailed {
            id: "m-1".into(),
            platform: "gce".into(),
        }
    }

    #[test]
    fn codes_combine_domain_category_and_sequence() {
        assert_eq!(MachineError::NoQuota {}.error_code().to_string(), "SDCL4001");
        assert_eq!(boot_failed().error_code().to_string(), "SDCL5002");
    }

    #[test]
    fn message_fills_every_field() {
        assert_eq!(boot_failed().message(), "machine m-1 on gce failed to boot");
        assert_eq!(boot_failed().to_string(), boot_failed().message());
    }

    #[test]
    fn help_is_optional() {
        assert_eq!(MachineError::NoQuota {}.help_text(), None);
        assert_eq!(
            boot_failed().help_text(),
            Some("check the platform console output")
        );
    }

    #[test]
    fn severity_defaults_to_error() {
        assert_eq!(MachineError::NoQuota {}.severity(), Severity::Error);
        assert_eq!(
            MachineError::Leaked { id: "m-2".into() }.severity(),
            Severity::Warning
        );
    }
}
