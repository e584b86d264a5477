//! Writes emitted files to disk idempotently and reconciles the output
//! directory against what was actually produced this run (spec.md §4.H,
//! Component H, "Orphan files").
//!
//! Deciding what to do with an orphan — a file under the output directory
//! this run didn't produce — is a policy decision that belongs to the
//! caller (interactive confirmation on a terminal, silent deletion under
//! `--quiet`), so it's expressed as the [`OrphanPolicy`] trait rather than
//! hard-coded here. That keeps this module testable without a terminal.

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file this run wants to exist, with its final contents.
pub struct OutputFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// What happened to one path during [`write_output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

pub trait OrphanPolicy {
    /// Called once per orphan file found under the output directory.
    /// Return `true` to delete it.
    fn should_delete(&mut self, path: &Path) -> bool;
}

/// An [`OrphanPolicy`] that deletes every orphan without asking —
/// `--quiet` mode (spec.md §6).
pub struct DeleteAllOrphans;

impl OrphanPolicy for DeleteAllOrphans {
    fn should_delete(&mut self, _path: &Path) -> bool {
        true
    }
}

/// An [`OrphanPolicy`] that never deletes anything, for dry runs and
/// tests.
pub struct KeepAllOrphans;

impl OrphanPolicy for KeepAllOrphans {
    fn should_delete(&mut self, _path: &Path) -> bool {
        false
    }
}

/// Writes every file in `files` under `output_dir`, skipping any whose
/// on-disk contents already match (spec.md §4.H "write-if-changed"), then
/// walks `output_dir` for files this run didn't produce and asks `policy`
/// whether to delete each one.
pub fn write_output(
    output_dir: &Path,
    files: &[OutputFile],
    policy: &mut dyn OrphanPolicy,
) -> Result<Vec<(PathBuf, WriteOutcome)>> {
    std::fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir.to_path_buf(), e))?;

    let mut outcomes = Vec::with_capacity(files.len());
    let mut produced: HashSet<PathBuf> = HashSet::with_capacity(files.len());

    for file in files {
        let full_path = output_dir.join(&file.relative_path);
        produced.insert(full_path.clone());

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent.to_path_buf(), e))?;
        }

        let outcome = if existing_contents_match(&full_path, &file.contents) {
            WriteOutcome::Unchanged
        } else {
            std::fs::write(&full_path, &file.contents)
                .map_err(|e| Error::io(full_path.clone(), e))?;
            WriteOutcome::Written
        };
        outcomes.push((full_path, outcome));
    }

    for entry in WalkDir::new(output_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.into_path();
        if !produced.contains(&path) && policy.should_delete(&path) {
            std::fs::remove_file(&path).map_err(|e| Error::io(path, e))?;
        }
    }

    Ok(outcomes)
}

fn existing_contents_match(path: &Path, contents: &str) -> bool {
    std::fs::read_to_string(path)
        .map(|existing| existing == contents)
        .unwrap_or(false)
}

/// Write-if-changed for a single output file outside the orphan-tracked
/// directory scheme (spec.md §4.H) — used by `content-model`, whose
/// `--output` names one file rather than a directory.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent.to_path_buf(), e))?;
        }
    }
    if existing_contents_match(path, contents) {
        return Ok(WriteOutcome::Unchanged);
    }
    std::fs::write(path, contents).map_err(|e| Error::io(path.to_path_buf(), e))?;
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_rewrite_when_contents_are_unchanged() {
        let dir = std::env::temp_dir().join("graphql-codegen-output-test-unchanged");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let files = vec![OutputFile {
            relative_path: PathBuf::from("a.ts"),
            contents: "export const a = 1;\n".to_string(),
        }];

        write_output(&dir, &files, &mut KeepAllOrphans).unwrap();
        let outcomes = write_output(&dir, &files, &mut KeepAllOrphans).unwrap();
        assert_eq!(outcomes[0].1, WriteOutcome::Unchanged);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn deletes_orphans_under_delete_all_policy() {
        let dir = std::env::temp_dir().join("graphql-codegen-output-test-orphan");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("stale.ts"), "old").unwrap();

        write_output(&dir, &[], &mut DeleteAllOrphans).unwrap();
        assert!(!dir.join("stale.ts").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
