//! Bounded-depth directory tree construction
//!
//! The walk is iterative (explicit frame stack) and yields the same order as a
//! recursive pre-order descent with entries sorted by name at each level.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ScanError, ScanResult};
use crate::language::LanguageTag;
use crate::scanner::classifier::PathClassifier;
use crate::utils::paths::join_relative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One kept entry of the scanned tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub kind: NodeKind,
    /// Full filesystem path, the entry's identity within one scan
    pub path: String,
    /// `/`-separated path from the scan root, `""` for the root
    pub relative_path: String,
    /// Files only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageTag>,
    /// Files only, in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Directories only, sorted by name
    #[serde(default)]
    pub children: Vec<FileNode>,
}

impl FileNode {
    fn directory(name: String, path: &Path, relative_path: String) -> Self {
        Self {
            name,
            kind: NodeKind::Directory,
            path: path.to_string_lossy().into_owned(),
            relative_path,
            language: None,
            size: None,
            children: Vec::new(),
        }
    }

    fn file(name: String, path: &Path, relative_path: String, language: LanguageTag, size: u64) -> Self {
        Self {
            name,
            kind: NodeKind::File,
            path: path.to_string_lossy().into_owned(),
            relative_path,
            language: Some(language),
            size: Some(size),
            children: Vec::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Resolved language; directories report `Unknown`
    pub fn language(&self) -> LanguageTag {
        self.language.unwrap_or(LanguageTag::Unknown)
    }

    /// All file nodes in tree order
    pub fn files(&self) -> Vec<&FileNode> {
        let mut files = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_file() {
                files.push(node);
            }
            // Reverse so the first child is visited first
            stack.extend(node.children.iter().rev());
        }
        files
    }
}

/// A directory entry that passed the classifier
struct Entry {
    name: String,
    path: PathBuf,
    relative_path: String,
    is_dir: bool,
    language: LanguageTag,
    size: u64,
}

/// A directory whose children are still being visited
struct Frame {
    node: FileNode,
    depth: usize,
    pending: std::vec::IntoIter<Entry>,
}

/// Fail fast on a root that cannot be scanned at all
pub fn check_root(root: &Path) -> ScanResult<()> {
    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Walk `root` into a `FileNode` hierarchy
///
/// Root depth is 0. Directories at `max_depth` are kept with empty children;
/// anything deeper is omitted. Symbolic links are skipped. An unreadable
/// subdirectory becomes an empty directory node.
pub fn build_tree(root: &Path, classifier: &PathClassifier, max_depth: usize) -> ScanResult<FileNode> {
    check_root(root)?;

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned());
    let root_node = FileNode::directory(name, root, String::new());

    let entries = read_entries(root, "", classifier).map_err(|e| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source: e,
    })?;
    let entries = if max_depth == 0 { Vec::new() } else { entries };

    let mut frame = Frame {
        node: root_node,
        depth: 0,
        pending: entries.into_iter(),
    };
    // Ancestors of `frame`, innermost last
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        let Some(entry) = frame.pending.next() else {
            match stack.pop() {
                Some(mut parent) => {
                    parent.node.children.push(frame.node);
                    frame = parent;
                    continue;
                }
                None => return Ok(frame.node),
            }
        };

        let depth = frame.depth + 1;
        if !entry.is_dir {
            frame.node.children.push(FileNode::file(
                entry.name,
                &entry.path,
                entry.relative_path,
                entry.language,
                entry.size,
            ));
            continue;
        }

        let node = FileNode::directory(entry.name, &entry.path, entry.relative_path);
        if depth >= max_depth {
            // Cut off: present, but not descended into
            frame.node.children.push(node);
            continue;
        }

        let children = match read_entries(&entry.path, &node.relative_path, classifier) {
            Ok(children) => children,
            Err(e) => {
                warn!("Cannot read directory {}: {}", entry.path.display(), e);
                Vec::new()
            }
        };
        let child = Frame {
            node,
            depth,
            pending: children.into_iter(),
        };
        stack.push(std::mem::replace(&mut frame, child));
    }
}

/// Read, classify and sort the kept entries of one directory
fn read_entries(dir: &Path, relative_dir: &str, classifier: &PathClassifier) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for item in fs::read_dir(dir)? {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        // DirEntry::file_type does not follow symlinks
        let file_type = match item.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                debug!("Skipping {}: {}", item.path().display(), e);
                continue;
            }
        };
        if file_type.is_symlink() {
            debug!("Skipping symlink {}", item.path().display());
            continue;
        }
        let is_dir = file_type.is_dir();
        if !is_dir && !file_type.is_file() {
            continue;
        }

        let name = item.file_name().to_string_lossy().into_owned();
        let relative_path = join_relative(relative_dir, &name);
        let classification = classifier.classify(&relative_path, is_dir);
        if classification.ignored {
            continue;
        }

        let size = if is_dir {
            0
        } else {
            match item.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    debug!("Skipping {}: {}", item.path().display(), e);
                    continue;
                }
            }
        };

        entries.push(Entry {
            name,
            path: item.path(),
            relative_path,
            is_dir,
            language: classification.language,
            size,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use tempfile::TempDir;

    fn classifier() -> PathClassifier {
        PathClassifier::new(&ScanConfig::default(), &[])
    }

    fn names(node: &FileNode) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_tree_with_ignores() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/config"), "[core]").unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/util.py"), "x = 1\n").unwrap();
        fs::write(root.join("src/app.py"), "y = 2\n").unwrap();
        fs::write(root.join("README.md"), "# Demo\n").unwrap();
        fs::write(root.join("logo.png"), [0u8; 4]).unwrap();

        let tree = build_tree(root, &classifier(), 10).unwrap();

        assert_eq!(tree.relative_path, "");
        assert_eq!(names(&tree), vec!["README.md", "src"]);
        let src = &tree.children[1];
        assert!(src.is_dir());
        assert_eq!(src.relative_path, "src");
        assert_eq!(names(src), vec!["app.py", "util.py"]);

        let app = &src.children[0];
        assert_eq!(app.relative_path, "src/app.py");
        assert_eq!(app.language, Some(LanguageTag::Python));
        assert_eq!(app.size, Some(6));
        assert!(app.children.is_empty());
    }

    #[test]
    fn test_depth_cutoff_keeps_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("a/one.py"), "").unwrap();
        fs::write(root.join("a/b/two.py"), "").unwrap();
        fs::write(root.join("a/b/c/three.py"), "").unwrap();

        let tree = build_tree(root, &classifier(), 2).unwrap();

        let a = &tree.children[0];
        assert_eq!(names(a), vec!["b", "one.py"]);
        let b = &a.children[0];
        assert!(b.is_dir());
        assert!(b.children.is_empty());

        let zero = build_tree(root, &classifier(), 0).unwrap();
        assert!(zero.children.is_empty());
    }

    #[test]
    fn test_files_in_tree_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a.py"), "").unwrap();
        fs::write(root.join("b/c.py"), "").unwrap();
        fs::write(root.join("d.py"), "").unwrap();

        let tree = build_tree(root, &classifier(), 10).unwrap();
        let order: Vec<&str> = tree.files().iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(order, vec!["a.py", "b/c.py", "d.py"]);
    }

    #[test]
    fn test_root_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            build_tree(&missing, &classifier(), 10),
            Err(ScanError::RootNotFound { .. })
        ));

        let file = temp_dir.path().join("file.py");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            build_tree(&file, &classifier(), 10),
            Err(ScanError::RootNotDirectory { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("real.py"), "").unwrap();
        std::os::unix::fs::symlink(root.join("real.py"), root.join("link.py")).unwrap();
        std::os::unix::fs::symlink(root, root.join("loop")).unwrap();

        let tree = build_tree(root, &classifier(), 10).unwrap();
        assert_eq!(names(&tree), vec!["real.py"]);
    }
}
