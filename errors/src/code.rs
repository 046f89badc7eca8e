use std::fmt;

/// Which part of the harness raised the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Test catalog and selection.
    RG,
    /// Resource release.
    CL,
    CF,
    IN,
}

impl Domain {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RG => "RG",
            Self::CL => "CL",
            Self::CF => "CF",
            Self::IN => "IN",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category digit of an error code. Gaps in the numbering are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Input that could not be parsed: globs, versions, config files.
    Malformed = 0,
    Validation = 2,
    /// A name that is already taken.
    Conflict = 3,
    Missing = 4,
    /// A resource could not be torn down.
    Release = 5,
    Timeout = 7,
    /// Harness bugs.
    Internal = 9,
}

impl Category {
    pub const fn as_digit(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_digit())
    }
}

/// `SD`, two domain letters, one category digit, three sequence digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub domain: Domain,
    pub category: Category,
    pub sequence: u16,
}

impl ErrorCode {
    pub const fn new(
        domain: Domain,
        category: Category,
        sequence: u16,
    ) -> Self {
        Self {
            domain,
            category,
            sequence,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "SD{}{}{:03}",
            self.domain,
            self.category.as_digit(),
            self.sequence
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Aborts the run
    #[default]
    Error,
    /// Reported, run continues
    Warning,
    /// Shown only at higher log levels
    Info,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Error)
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Error => 2,
            Self::Warning => 1,
            Self::Info => 0,
        }
    }

    /// Returns the more severe of the two levels.
    pub const fn max(
        self,
        other: Self,
    ) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }
}

impl fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_display() {
        let code = ErrorCode::new(Domain::RG, Category::Conflict, 1);
        assert_eq!(code.to_string(), "SDRG3001");

        let code = ErrorCode::new(Domain::CL, Category::Release, 12);
        assert_eq!(code.to_string(), "SDCL5012");

        let code = ErrorCode::new(Domain::IN, Category::Internal, 1);
        assert_eq!(code.to_string(), "SDIN9001");
    }

    #[test]
    fn category_digits_keep_their_slots() {
        let digits: Vec<u8> = [
            Category::Malformed,
            Category::Validation,
            Category::Conflict,
            Category::Missing,
            Category::Release,
            Category::Timeout,
            Category::Internal,
        ]
        .iter()
        .map(Category::as_digit)
        .collect();

        assert_eq!(digits, vec![0, 2, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn severity_properties() {
        assert!(Severity::Error.is_fatal());
        assert!(!Severity::Warning.is_fatal());
        assert!(!Severity::Info.is_fatal());
    }

    #[test]
    fn severity_max() {
        assert_eq!(Severity::Info.max(Severity::Warning), Severity::Warning);
        assert_eq!(Severity::Error.max(Severity::Warning), Severity::Error);
        assert_eq!(Severity::Info.max(Severity::Info), Severity::Info);
    }
}
