use regex::Regex;
use tracing::{debug, warn};

use super::location::is_system_header;

/// One parsed front-end diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// Parses `file:line:col: severity: message` lines from the front-end's
/// stderr stream. Anything that doesn't match the shape (summaries, fixit
/// carets, banners) is ignored.
pub struct DiagnosticParser {
    diagnostic_re: Regex,
}

impl DiagnosticParser {
    pub fn new() -> Self {
        let diagnostic_re =
            Regex::new(r"^(.*?):(\d+):(\d+):\s*(error|warning|note):\s*(.*)$").unwrap();
        Self { diagnostic_re }
    }

    pub fn parse(&self, stderr: &str) -> Vec<Diagnostic> {
        stderr.lines().filter_map(|l| self.parse_line(l)).collect()
    }

    fn parse_line(&self, line: &str) -> Option<Diagnostic> {
        let captures = self.diagnostic_re.captures(line)?;
        let severity = match &captures[4] {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Note,
        };
        Some(Diagnostic {
            file: captures[1].to_string(),
            line: captures[2].parse().ok()?,
            column: captures[3].parse().ok()?,
            severity,
            message: captures[5].to_string(),
        })
    }
}

impl Default for DiagnosticParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Log recovered diagnostics without aborting the run.
///
/// Errors and warnings in user code surface at warn level; notes and
/// system-header noise are demoted to debug.
pub fn log_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        if is_system_header(&diag.file) || diag.severity == Severity::Note {
            debug!(
                "[front-end] {}:{}:{}: {}",
                diag.file, diag.line, diag.column, diag.message
            );
        } else {
            warn!(
                "[front-end] {}:{}:{}: {}",
                diag.file, diag.line, diag.column, diag.message
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/frontend/diagnostics_tests.rs"]
mod tests;
