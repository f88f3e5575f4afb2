// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Gitignore file merging.
//!
//! Fetched template bodies are concatenated in the order they were requested
//! and written to a single target file. Any existing file is truncated. The
//! write is not atomic, and a failed write is not rolled back.
//!
//! # Section Banners
//!
//! Bodies are glued together verbatim by default. With banners enabled, each
//! body is preceded by a `### <label> ###` comment line, and every section
//! starts on its own line after a blank separator.

use ignore::gitignore::GitignoreBuilder;
use std::{
    fs::write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Default output file, relative to current working directory.
pub const DEFAULT_OUTPUT: &str = ".gitignore";

/// Merge template bodies into a gitignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitignoreMerger {
    path: PathBuf,
    banners: bool,
}

impl GitignoreMerger {
    /// Construct new merger writing to target path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            banners: false,
        }
    }

    /// Toggle section banners.
    pub fn with_banners(mut self, banners: bool) -> Self {
        self.banners = banners;
        self
    }

    /// Path to target file.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Check if target file already exists.
    pub fn file_exists(&self) -> bool {
        self.path.exists()
    }

    /// Concatenate template bodies in order.
    ///
    /// Labels are only used for section banners. A body without a matching
    /// label gets an empty banner.
    pub fn merge(&self, contents: &[impl AsRef<[u8]>], labels: &[impl AsRef<str>]) -> Vec<u8> {
        let mut merged = Vec::new();
        for (index, content) in contents.iter().enumerate() {
            if self.banners {
                if !merged.is_empty() {
                    if !merged.ends_with(b"\n") {
                        merged.push(b'\n');
                    }
                    merged.push(b'\n');
                }
                let label: &str = labels.get(index).map(AsRef::as_ref).unwrap_or_default();
                merged.extend_from_slice(format!("### {label} ###\n").as_bytes());
            }
            merged.extend_from_slice(content.as_ref());
        }

        merged
    }

    /// Merge template bodies, and write result to target file.
    ///
    /// Overwrites target file if it exists. Patterns that do not compile as
    /// gitignore globs are logged as warnings.
    ///
    /// # Errors
    ///
    /// - Return [`MergeError::Write`] if target file cannot be written.
    pub fn generate(
        &self,
        contents: &[impl AsRef<[u8]>],
        labels: &[impl AsRef<str>],
    ) -> Result<()> {
        let merged = self.merge(contents, labels);
        debug!("write {} bytes to {:?}", merged.len(), self.path.display());
        write(&self.path, &merged).map_err(|err| MergeError::Write {
            source: err,
            path: self.path.clone(),
        })?;

        for pattern in invalid_patterns(&merged) {
            warn!("pattern {pattern:?} in {:?} is not a valid glob", self.path.display());
        }

        Ok(())
    }
}

impl Default for GitignoreMerger {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

/// Collect lines that fail to compile as gitignore patterns.
///
/// Blank lines and comments are skipped.
pub fn invalid_patterns(content: &[u8]) -> Vec<String> {
    let content = String::from_utf8_lossy(content);
    let mut builder = GitignoreBuilder::new(".");
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter(|line| builder.add_line(None, line).is_err())
        .map(str::to_owned)
        .collect()
}

/// Merge error types.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Target file cannot be written to.
    #[error("failed to write to {:?}", path.display())]
    Write {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = MergeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;
    use std::fs::read;

    #[test]
    fn merge_concatenates_in_order() {
        let merger = GitignoreMerger::default();
        let result = merger.merge(&[b"A".as_slice(), b"B".as_slice()], &["x", "y"]);
        assert_eq!(result, b"AB");

        let result = merger.merge(&[b"B".as_slice(), b"A".as_slice()], &["y", "x"]);
        assert_eq!(result, b"BA");
    }

    #[test]
    fn merge_with_banners() {
        let merger = GitignoreMerger::default().with_banners(true);
        let result = merger.merge(&["*.o", "bin/\n", "*.log\n"], &["C", "Go", "Node"]);
        let expect = indoc! {r#"
            ### C ###
            *.o

            ### Go ###
            bin/

            ### Node ###
            *.log
        "#};
        assert_eq!(String::from_utf8_lossy(&result), expect);
    }

    #[test]
    fn merge_with_banners_missing_label() {
        let merger = GitignoreMerger::default().with_banners(true);
        let result = merger.merge(&["*.o\n"], &[] as &[&str]);
        assert_eq!(result, b"###  ###\n*.o\n");
    }

    #[sealed_test]
    fn generate_writes_target_file() -> anyhow::Result<()> {
        let merger = GitignoreMerger::default();
        assert!(!merger.file_exists());

        merger.generate(&[b"go-content".to_vec(), b"py-content".to_vec()], &["Go", "Python"])?;
        assert!(merger.file_exists());
        assert_eq!(read(DEFAULT_OUTPUT)?, b"go-contentpy-content");

        Ok(())
    }

    #[sealed_test]
    fn generate_overwrites_existing_file() -> anyhow::Result<()> {
        std::fs::write(DEFAULT_OUTPUT, "a much longer block of old content\n")?;

        let merger = GitignoreMerger::default();
        assert!(merger.file_exists());
        merger.generate(&["new"], &["Go"])?;
        assert_eq!(read(DEFAULT_OUTPUT)?, b"new");

        Ok(())
    }

    #[sealed_test]
    fn generate_invalid_target() {
        let merger = GitignoreMerger::new("missing/dir/.gitignore");
        let result = merger.generate(&["*.o"], &["C"]);
        assert!(matches!(result, Err(MergeError::Write { .. })));
    }

    #[test]
    fn invalid_patterns_reports_bad_globs() {
        let content = indoc! {r#"
            # Comment with [ bracket
            *.log

            build/
            {a,b
            !keep.log
            [z-a]
            src/[abc
        "#};
        assert_eq!(invalid_patterns(content.as_bytes()), vec!["{a,b", "[z-a]"]);
    }
}
