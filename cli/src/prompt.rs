//! Interactive orphan-file confirmation (spec.md §4.H) — the one piece of
//! terminal I/O in the whole pipeline, kept out of `graphql_codegen_core`
//! behind its `OrphanPolicy` trait so the core stays testable headless.

use graphql_codegen_core::output::OrphanPolicy;
use std::io::{self, Write};
use std::path::Path;

pub struct ConfirmOrphanDeletion;

impl OrphanPolicy for ConfirmOrphanDeletion {
    fn should_delete(&mut self, path: &Path) -> bool {
        print!("Delete orphaned file {}? [y/N] ", path.display());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
