//! Requirements manifest discovery and parsing
//!
//! The manifest is a plain UTF-8 file with one requirement per line.
//! After trimming, blank lines and lines starting with `#` are ignored;
//! everything else is passed to the installer verbatim, in file order.
//! Duplicates, version specifiers, extras and markers are not interpreted.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{DepbootError, Result};

/// Manifest file name looked up in the workspace directory
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Marker that starts a comment line
pub const COMMENT_MARKER: char = '#';

const UTF8_BOM: char = '\u{feff}';

/// Classification of a single manifest line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Declaration,
}

/// A single line of the manifest, with its trimmed form and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementLine<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
    pub kind: LineKind,
}

impl<'a> RequirementLine<'a> {
    /// Classify a raw line
    pub fn classify(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with(COMMENT_MARKER) {
            LineKind::Comment
        } else {
            LineKind::Declaration
        };
        Self { raw, trimmed, kind }
    }

    pub fn is_declaration(&self) -> bool {
        self.kind == LineKind::Declaration
    }
}

/// Ordered list of requirement declarations extracted from a manifest
///
/// Order follows the manifest. Duplicates are kept; the installer decides
/// what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet(Vec<String>);

impl RequirementSet {
    /// Parse manifest text into a requirement set
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let requirements = content
            .lines()
            .map(RequirementLine::classify)
            .filter(RequirementLine::is_declaration)
            .map(|line| line.trimmed.to_string())
            .collect();
        Self(requirements)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A manifest at a known location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate a manifest relative to a workspace directory.
    /// Absolute manifest paths are used as-is.
    pub fn locate(workspace: &Path, manifest: &Path) -> Self {
        Self::new(workspace.join(manifest))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in status messages (e.g. `requirements.txt`)
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            })
    }

    /// Whether the manifest exists. An I/O error while checking (e.g. a
    /// parent directory without search permission) is a read failure, not
    /// an absent manifest.
    pub fn exists(&self) -> Result<bool> {
        self.path
            .try_exists()
            .map_err(|e| DepbootError::ManifestReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }

    /// Read the full manifest text
    pub fn read(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| DepbootError::ManifestReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        String::from_utf8(bytes).map_err(|_| DepbootError::ManifestNotUtf8 {
            path: self.path.display().to_string(),
        })
    }

    /// Read and parse the manifest
    pub fn requirements(&self) -> Result<RequirementSet> {
        let content = self.read()?;
        Ok(RequirementSet::parse(&content))
    }
}
