use std::io::{self, Write};

use crate::extract::DeclRecord;

/// Output switches for the textual report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Suppress records that are not definitions. The trailing total still
    /// counts every collected record.
    pub definitions_only: bool,
    /// Reserved: macro definitions are not present in the front-end's JSON
    /// dump, so this switch currently changes nothing.
    pub include_macros: bool,
}

/// Emit the report for one run.
///
/// Records arrive in traversal order and print as-is, one line each:
/// `<signature>  // <definition|declaration> at <line>:<column>`.
pub fn emit(
    out: &mut impl Write,
    source: &str,
    records: &[DeclRecord],
    options: &ReportOptions,
) -> io::Result<()> {
    writeln!(out, "=== Declarations from {source} ===")?;
    writeln!(out)?;

    for record in records {
        if options.definitions_only && !record.is_definition {
            continue;
        }
        let status = if record.is_definition {
            "definition"
        } else {
            "declaration"
        };
        writeln!(
            out,
            "{}  // {} at {}:{}",
            record.signature, status, record.line, record.column
        )?;
    }

    writeln!(out)?;
    writeln!(out, "=== Total: {} items ===", records.len())?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src/report_tests.rs"]
mod tests;
