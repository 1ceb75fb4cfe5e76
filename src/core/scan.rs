use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Comma-separated allow-list into a lowercased extension set. Entries are
/// trimmed, leading dots stripped, empties dropped.
pub fn parse_extensions(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Immediate entries of `dir` whose extension is in the allow-list,
/// case-insensitive. Sorted so seeded selection is reproducible across
/// platforms.
pub fn list_images(dir: &Path, allowed: &BTreeSet<String>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(ext) = entry.path().extension().and_then(|s| s.to_str()) {
            if allowed.contains(&ext.to_lowercase()) {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn parses_allow_list() {
        let allowed = parse_extensions(" png , JPG ,, .webp ");
        assert_eq!(allowed.len(), 3);
        assert!(allowed.contains("png"));
        assert!(allowed.contains("jpg"));
        assert!(allowed.contains("webp"));
    }

    #[test]
    fn filters_case_insensitively_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "A.PNG", "c.txt", "noext"] {
            File::create(dir.path().join(name)).unwrap();
        }
        let allowed = parse_extensions("png,jpg");
        let files = list_images(dir.path(), &allowed);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["A.PNG", "b.jpg"]);
    }

    #[test]
    fn skips_subdirectories_and_their_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        File::create(dir.path().join("nested.png").join("inner.png")).unwrap();
        File::create(dir.path().join("top.png")).unwrap();
        let allowed = parse_extensions("png");
        let files = list_images(dir.path(), &allowed);
        assert_eq!(files, vec![dir.path().join("top.png")]);
    }

    #[test]
    fn nothing_matches_disallowed_extensions() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("c.txt")).unwrap();
        let allowed = parse_extensions("png,jpg");
        assert!(list_images(dir.path(), &allowed).is_empty());
    }
}
