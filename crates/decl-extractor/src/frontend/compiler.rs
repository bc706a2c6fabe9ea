use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::clang_nodes::Node;
use super::diagnostics::{DiagnosticParser, Severity, log_diagnostics};
use crate::error::{ExtractError, Result};

/// Invocation settings for the external Clang front-end.
///
/// The parser/sema service is the `clang` driver run with a JSON AST dump;
/// everything here feeds its command line.
#[derive(Debug, Clone)]
pub struct FrontendOptions {
    /// Front-end driver binary. `clang` unless configured otherwise.
    pub binary: String,
    /// Directories passed as `-I` flags, from configuration.
    pub include_paths: Vec<String>,
    /// Extra flags from configuration (e.g. `-std=c11`, `-DFOO`).
    pub extra_flags: Vec<String>,
    /// Verbatim pass-through arguments from the command line, after `--`.
    pub passthrough_args: Vec<String>,
}

impl Default for FrontendOptions {
    fn default() -> Self {
        Self {
            binary: "clang".to_string(),
            include_paths: Vec::new(),
            extra_flags: Vec::new(),
            passthrough_args: Vec::new(),
        }
    }
}

/// Flags that keep the front-end lenient about broken or incomplete code:
/// no codegen, no error cap, no warning noise.
const LENIENT_FLAGS: &[&str] = &[
    "-fsyntax-only",
    "-fno-color-diagnostics",
    "-ferror-limit=0",
    "-Wno-everything",
];

/// Build the full argument vector for the AST dump invocation.
///
/// Configured flags come first and CLI pass-through arguments last, so the
/// command line wins where the driver resolves conflicts positionally.
pub fn build_dump_args(
    source: &Path,
    options: &FrontendOptions,
) -> Vec<String> {
    let mut args = vec!["-Xclang".to_string(), "-ast-dump=json".to_string()];
    args.extend(LENIENT_FLAGS.iter().map(|f| f.to_string()));

    for path in &options.include_paths {
        args.push("-I".to_string());
        args.push(path.clone());
    }
    args.extend(options.extra_flags.iter().cloned());
    args.extend(options.passthrough_args.iter().cloned());

    args.push(source.display().to_string());
    args
}

/// Run the front-end's AST dump and return the raw JSON string.
///
/// A non-zero front-end exit with usable JSON on stdout is a recovered run:
/// the diagnostics are logged and the best-effort tree is used. Only a
/// missing file, an unlaunchable binary, or an empty dump abort.
pub fn run_ast_dump(
    source: &Path,
    options: &FrontendOptions,
) -> Result<String> {
    if !source.exists() {
        return Err(ExtractError::MissingFile(source.to_path_buf()));
    }

    let args = build_dump_args(source, options);
    debug!("AST dump: {} {}", options.binary, args.join(" "));

    let output = Command::new(&options.binary).args(&args).output().map_err(|e| {
        ExtractError::FrontendUnavailable {
            binary: options.binary.clone(),
            source: e,
        }
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostics = DiagnosticParser::new().parse(&stderr);
    log_diagnostics(&diagnostics);

    if !output.status.success() {
        debug!("front-end exited with non-zero status (partial AST may still be usable)");
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| ExtractError::ParseFailure {
        detail: "AST dump is not valid UTF-8".to_string(),
    })?;
    if stdout.is_empty() || !stdout.starts_with('{') {
        let detail = diagnostics
            .iter()
            .find(|d| d.severity == Severity::Error)
            .map(|d| format!("{}:{}:{}: {}", d.file, d.line, d.column, d.message))
            .unwrap_or_else(|| "front-end produced no JSON".to_string());
        return Err(ExtractError::ParseFailure { detail });
    }

    debug!("AST dump produced {} bytes of JSON", stdout.len());
    Ok(stdout)
}

/// Deserialize the dump into the typed node tree.
pub fn parse_tree(json: &str) -> Result<Node> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[path = "../../tests/src/frontend/compiler_tests.rs"]
mod tests;
