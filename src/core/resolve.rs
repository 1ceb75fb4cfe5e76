use std::path::PathBuf;

use crate::core::error::NodeError;

/// Ordered candidates for a user-supplied folder: the path as given, then
/// joined onto each search base.
pub fn candidate_dirs(folder: &str, bases: &[PathBuf]) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(bases.len() + 1);
    candidates.push(PathBuf::from(folder));
    for base in bases {
        candidates.push(base.join(folder));
    }
    candidates
}

/// First candidate that exists and is a directory.
pub fn resolve_folder(folder: &str, bases: &[PathBuf]) -> Result<PathBuf, NodeError> {
    let candidates = candidate_dirs(folder, bases);
    for candidate in &candidates {
        if candidate.is_dir() {
            return Ok(candidate.clone());
        }
    }
    Err(NodeError::FolderNotFound {
        requested: folder.to_string(),
        attempted: candidates,
    })
}
