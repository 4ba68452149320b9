use std::io::Write;

use serde::Serialize;

/// Two counted severities plus an informational marker that never affects
/// the pass/fail outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Error => "E",
            Self::Warning => "W",
            Self::Info => "I",
        }
    }
}

/// A severity-tagged, addressable message about one node or one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub sent_id: String,
    /// Unset for sentence- and document-scoped diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn node(severity: Severity, sent_id: &str, node_id: usize, message: String) -> Self {
        Self {
            severity,
            sent_id: sent_id.to_string(),
            node_id: Some(node_id),
            message,
        }
    }

    #[must_use]
    pub fn sentence(severity: Severity, sent_id: &str, message: String) -> Self {
        Self {
            severity,
            sent_id: sent_id.to_string(),
            node_id: None,
            message,
        }
    }

    /// One output line: `<marker> <sent_id> [<node_id>] <message>`.
    #[must_use]
    pub fn render(&self) -> String {
        match self.node_id {
            Some(id) => format!(
                "{} {} {} {}",
                self.severity.marker(),
                self.sent_id,
                id,
                self.message
            ),
            None => format!("{} {} {}", self.severity.marker(), self.sent_id, self.message),
        }
    }
}

/// Append-only diagnostic collector for one validation run.
///
/// Diagnostics are kept, and rendered, in the exact order they were recorded:
/// document order, then sentence order, then node order, then
/// check-registration order. They are never re-sorted, so run-to-run diffs
/// stay meaningful.
#[derive(Debug, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Errors block a release; warnings never do.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Writes every diagnostic to `sink`, one line each, in recorded order.
    ///
    /// # Errors
    /// Propagates write failures from the sink.
    pub fn render<W: Write>(&self, sink: &mut W) -> std::io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(sink, "{}", diagnostic.render())?;
        }
        Ok(())
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        let warnings = self.warning_count();
        if errors == 0 && warnings == 0 {
            "*** PASSED ***".to_string()
        } else if errors == 0 {
            format!("*** PASSED *** with {warnings} warning(s)")
        } else {
            format!("*** FAILED *** with {errors} error(s) and {warnings} warning(s)")
        }
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
