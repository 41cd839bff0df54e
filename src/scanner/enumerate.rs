//! Flattened views over a scanned tree
//!
//! All lists are in tree order and hold full filesystem paths.

use anyhow::Result;
use std::path::Path;

use crate::language::normalize_extension;
use crate::scanner::tree::FileNode;
use crate::utils::file_utils::read_lossy;
use crate::utils::paths::relative_depth;

/// File paths in tree order, optionally restricted to some extensions
///
/// Extensions match case-insensitively, with or without the leading dot. An
/// empty filter keeps every file.
pub fn flatten<S: AsRef<str>>(tree: &FileNode, extension_filter: &[S]) -> Vec<String> {
    let extensions: Vec<String> = extension_filter
        .iter()
        .map(|ext| normalize_extension(ext.as_ref()))
        .collect();

    tree.files()
        .into_iter()
        .filter(|file| {
            if extensions.is_empty() {
                return true;
            }
            let lower = file.name.to_ascii_lowercase();
            extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
        })
        .map(|file| file.path.clone())
        .collect()
}

/// Likely entry points, ordered by name priority and then tree order
///
/// A file qualifies when its name matches one of `names` case-insensitively
/// and its containing directory is at most `max_depth_from_root` levels below
/// the root (root-level files are at 0).
pub fn find_entry_points<S: AsRef<str>>(
    tree: &FileNode,
    names: &[S],
    max_depth_from_root: usize,
) -> Vec<String> {
    let candidates: Vec<&FileNode> = tree
        .files()
        .into_iter()
        .filter(|file| relative_depth(&file.relative_path) <= max_depth_from_root)
        .collect();

    let mut entry_points: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref();
        for file in &candidates {
            if file.name.eq_ignore_ascii_case(name) && !entry_points.contains(&file.path) {
                entry_points.push(file.path.clone());
            }
        }
    }
    entry_points
}

/// README at the root: exact names in declared order, then the same names
/// case-insensitively
pub fn find_readme<S: AsRef<str>>(tree: &FileNode, names: &[S]) -> Option<String> {
    let root_files: Vec<&FileNode> = tree.children.iter().filter(|c| c.is_file()).collect();

    let exact = names
        .iter()
        .find_map(|name| root_files.iter().find(|f| f.name == name.as_ref()));
    let found = exact.or_else(|| {
        names.iter().find_map(|name| {
            root_files
                .iter()
                .find(|f| f.name.eq_ignore_ascii_case(name.as_ref()))
        })
    });

    found.map(|file| file.path.clone())
}

/// README content for the documentation collaborator, decoded lossily
pub fn read_readme(path: &Path) -> Result<String> {
    let (content, _) = read_lossy(path)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScanConfig, DEFAULT_ENTRY_POINT_NAMES, DEFAULT_README_NAMES};
    use crate::scanner::classifier::PathClassifier;
    use crate::scanner::tree::build_tree;
    use std::fs;
    use tempfile::TempDir;

    fn scan(root: &Path) -> FileNode {
        build_tree(root, &PathClassifier::new(&ScanConfig::default(), &[]), 10).unwrap()
    }

    fn relative(paths: &[String], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                Path::new(p)
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_flatten_with_and_without_filter() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("setup.py"), "").unwrap();
        fs::write(root.join("src/app.JS"), "").unwrap();
        fs::write(root.join("src/core.py"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        let tree = scan(root);

        let all = flatten::<&str>(&tree, &[]);
        assert_eq!(
            relative(&all, root),
            vec!["notes.txt", "setup.py", "src/app.JS", "src/core.py"]
        );

        let code = flatten(&tree, &["py", ".js"]);
        assert_eq!(relative(&code, root), vec!["setup.py", "src/app.JS", "src/core.py"]);
    }

    #[test]
    fn test_entry_points_priority_and_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("api")).unwrap();
        fs::create_dir_all(root.join("deep/nested")).unwrap();
        fs::write(root.join("App.py"), "").unwrap();
        fs::write(root.join("api/main.py"), "").unwrap();
        fs::write(root.join("deep/nested/main.py"), "").unwrap();
        let tree = scan(root);

        let entry_points = find_entry_points(&tree, DEFAULT_ENTRY_POINT_NAMES, 1);
        assert_eq!(relative(&entry_points, root), vec!["api/main.py", "App.py"]);

        let root_only = find_entry_points(&tree, DEFAULT_ENTRY_POINT_NAMES, 0);
        assert_eq!(relative(&root_only, root), vec!["App.py"]);
    }

    #[test]
    fn test_readme_exact_before_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/README.md"), "nested").unwrap();
        fs::write(root.join("README.txt"), "plain").unwrap();
        fs::write(root.join("ReadMe.MD"), "odd case").unwrap();
        let tree = scan(root);

        // README.txt is an exact match; ReadMe.MD only matches case-insensitively
        let readme = find_readme(&tree, DEFAULT_README_NAMES).unwrap();
        assert!(readme.ends_with("README.txt"));
        assert_eq!(read_readme(Path::new(&readme)).unwrap(), "plain");
    }

    #[test]
    fn test_readme_case_insensitive_fallback_and_absence() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("ReadMe.MD"), "odd case").unwrap();
        let tree = scan(root);
        assert!(find_readme(&tree, DEFAULT_README_NAMES).unwrap().ends_with("ReadMe.MD"));

        let empty_dir = TempDir::new().unwrap();
        let empty = scan(empty_dir.path());
        assert_eq!(find_readme(&empty, DEFAULT_README_NAMES), None);
    }
}
