//! Parallel file discovery and read for the primary document root
//! (spec.md §4.B "Loading").

use crate::error::{Error, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One `.graphql` file's path (relative to the scanned root) and contents.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// Recursively finds every `.graphql` file under `root` and reads them in
/// parallel. Files are returned sorted by path so downstream processing
/// (and any diagnostics naming "first" / "second" definitions) is
/// deterministic across runs and platforms.
pub fn load_documents(root: &Path) -> Result<Vec<SourceFile>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "graphql"))
        .collect();
    paths.sort();

    paths
        .into_par_iter()
        .map(|path| {
            let text = std::fs::read_to_string(&path).map_err(|e| Error::io(path.clone(), e))?;
            Ok(SourceFile { path, text })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_and_sorts_graphql_files_only() {
        let dir = tempdir();
        fs::write(dir.join("b.graphql"), "query B { b }").unwrap();
        fs::write(dir.join("a.graphql"), "query A { a }").unwrap();
        fs::write(dir.join("readme.md"), "not graphql").unwrap();

        let files = load_documents(&dir).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].path.ends_with("a.graphql"));
        assert!(files[1].path.ends_with("b.graphql"));

        fs::remove_dir_all(&dir).unwrap();
    }

    fn tempdir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "graphql-codegen-loader-test-{:?}",
            std::thread::current().id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }
}
