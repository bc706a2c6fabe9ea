use std::path::{Component, Path, PathBuf};

use clang_ast::{BareSourceLocation, SourceLocation};

/// A resolved 1-based source position inside the main file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

/// Location service for the translation unit's main file.
///
/// Answers whether a node's spelling location lies in the file named on the
/// command line, as opposed to anything pulled in through `#include`, at any
/// nesting depth.
#[derive(Debug, Clone)]
pub struct MainFile {
    given: PathBuf,
    canonical: Option<PathBuf>,
}

impl MainFile {
    pub fn new(path: &Path) -> Self {
        Self {
            given: path.to_path_buf(),
            canonical: path.canonicalize().ok(),
        }
    }

    /// The path as the user spelled it, for the report header.
    pub fn display(&self) -> std::path::Display<'_> {
        self.given.display()
    }

    /// Resolve a node location to a position in the main file.
    ///
    /// Returns `None` for absent or invalid locations and for locations in
    /// any other file; such nodes never produce a record.
    pub fn position_of(
        &self,
        loc: Option<&SourceLocation>,
    ) -> Option<SourcePos> {
        let bare = resolve_spelling(loc?)?;
        if bare.line == 0 || bare.file.is_empty() {
            return None;
        }
        if !self.contains(&bare.file) {
            return None;
        }
        Some(SourcePos {
            line: bare.line as u32,
            column: bare.col as u32,
        })
    }

    /// Check whether `file` refers to the main file.
    ///
    /// Compares verbatim first, then via canonicalization when both sides
    /// exist on disk, then by lexical normalization of absolute paths.
    /// Deliberately no basename-only fallback, which would claim same-named
    /// headers from other directories.
    pub fn contains(&self, file: &str) -> bool {
        let path = Path::new(file);
        if path == self.given.as_path() {
            return true;
        }
        if let Some(canonical) = &self.canonical
            && let Ok(c) = path.canonicalize()
        {
            return c == *canonical;
        }
        match (
            normalize_absolute_path(path),
            normalize_absolute_path(&self.given),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Extract the spelling location from a [`SourceLocation`].
///
/// The spelling location is the token position after macro substitution;
/// the expansion location (the macro invocation site) is only a fallback.
pub fn resolve_spelling(loc: &SourceLocation) -> Option<&BareSourceLocation> {
    loc.spelling_loc.as_ref().or(loc.expansion_loc.as_ref())
}

/// Returns `true` if a file path looks like a system / toolchain header.
pub fn is_system_header(path: &str) -> bool {
    path.is_empty()
        || path.starts_with('<')
        || path.contains("/usr/include/")
        || path.contains("/usr/local/include/")
        || path.contains("/lib/clang/")
        || path.contains("/Toolchains/")
        || path.contains("/SDKs/")
}

/// Lexical normalization for absolute paths: resolves `.` and `..` without
/// touching the filesystem, so missing files can still be compared.
fn normalize_absolute_path(path: &Path) -> Option<PathBuf> {
    if !path.is_absolute() {
        return None;
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let _ = normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    Some(normalized)
}

#[cfg(test)]
#[path = "../../tests/src/frontend/location_tests.rs"]
mod tests;
