//! Terminal reporting for CLI commands.

use console::{Style, Term};
use lw_convert::{Diagnostic, DiagnosticKind};

/// Where command output goes.
///
/// Progress, diagnostics and errors are written to stderr. Command results
/// (document paths, schema keys) go to stdout so they can be piped.
pub(crate) struct Output {
    messages: Term,
    results: Term,
    skipped: Style,
    failed: Style,
    done: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            messages: Term::stderr(),
            results: Term::stdout(),
            skipped: Style::new().yellow(),
            failed: Style::new().red(),
            done: Style::new().green(),
            heading: Style::new().cyan().bold(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.messages.write_line(msg);
    }

    /// Final summary line (green).
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.done, msg);
    }

    /// Fatal error (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.failed, msg);
    }

    /// Section heading above result lines (cyan bold).
    pub(crate) fn heading(&self, msg: &str) {
        self.styled(&self.heading, msg);
    }

    /// One per-record diagnostic: failures red, skips and warnings yellow.
    pub(crate) fn diagnostic(&self, diagnostic: &Diagnostic) {
        let style = match diagnostic.kind {
            DiagnosticKind::Failed { .. } => &self.failed,
            DiagnosticKind::Skipped { .. } | DiagnosticKind::Warning { .. } => &self.skipped,
        };
        self.styled(style, &diagnostic.to_string());
    }

    /// Result line on stdout.
    pub(crate) fn data(&self, line: &str) {
        let _ = self.results.write_line(line);
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.messages.write_line(&style.apply_to(msg).to_string());
    }
}
