// File utilities for document discovery

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use walkdir::WalkDir;

use super::DocumentFormat;

/// Find every file under `base_dir` whose name has a supported suffix
///
/// Results are sorted so batch runs visit documents in a stable order.
/// Entries that cannot be read (permissions, symlink loops) are logged and
/// skipped; only an unreadable `base_dir` is an error.
pub fn find_documents(base_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let base_dir = base_dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(base_dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e)
                    .with_context(|| format!("Failed to walk directory: {}", base_dir.display()));
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if DocumentFormat::from_name(&name).is_some() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
