//! Diagnostic integration with miette.
//! Converts errors to miette-compatible diagnostics for rich error reporting.

use crate::{ErrorCode, Severity};
use miette::Diagnostic;

/// A coded diagnostic for miette rendering.
///
/// Nested diagnostics are rendered by miette as separate related entries,
/// one block per cause.
#[derive(Debug)]
pub struct CodedDiagnostic {
    code: String,
    message: String,
    severity: Severity,
    help: Option<String>,
    related: Vec<CodedDiagnostic>,
}

impl CodedDiagnostic {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity,
            help: None,
            related: Vec::new(),
        }
    }

    pub fn with_help(
        mut self,
        help: impl Into<String>,
    ) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_related(
        mut self,
        related: Vec<CodedDiagnostic>,
    ) -> Self {
        self.related = related;
        self
    }

    pub fn related_count(&self) -> usize {
        self.related.len()
    }
}

impl std::fmt::Display for CodedDiagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodedDiagnostic {}

impl Diagnostic for CodedDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display>)
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        if self.related.is_empty() {
            return None;
        }
        Some(Box::new(
            self.related
                .iter()
                .map(|d| d as &dyn Diagnostic),
        ))
    }
}

/// Builder for creating diagnostics from domain errors.
pub struct DiagnosticBuilder {
    code: ErrorCode,
    message: String,
    severity: Severity,
    help: Option<String>,
    related: Vec<CodedDiagnostic>,
}

impl DiagnosticBuilder {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            severity,
            help: None,
            related: Vec::new(),
        }
    }

    pub fn help(
        mut self,
        help: impl Into<String>,
    ) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn help_opt(
        mut self,
        help: Option<&'static str>,
    ) -> Self {
        self.help = help.map(String::from);
        self
    }

    pub fn related(
        mut self,
        related: impl IntoIterator<Item = CodedDiagnostic>,
    ) -> Self {
        self.related.extend(related);
        self
    }

    pub fn build(self) -> CodedDiagnostic {
        let mut diag = CodedDiagnostic::new(self.code, self.message, self.severity)
            .with_related(self.related);

        if let Some(help) = self.help {
            diag = diag.with_help(help);
        }

        diag
    }

    pub fn into_report(self) -> miette::Report {
        miette::Report::new(self.build())
    }
}
