// Scanner Utilities Module
//
// File I/O helpers shared by the tree builder, extractors and aggregator.

/// File utilities
pub mod file_utils {
    use anyhow::{Context, Result};
    use std::fs::{self, File};
    use std::io::{BufRead, BufReader};
    use std::path::Path;

    /// Read a file as text, replacing invalid UTF-8 sequences
    ///
    /// Returns the decoded text and the raw bytes. The handle is
    /// dropped before returning on every path.
    pub fn read_lossy(path: &Path) -> Result<(String, Vec<u8>)> {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok((text, bytes))
    }

    /// Count newline bytes in a file without loading it whole
    pub fn count_lines(path: &Path) -> Result<usize> {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut reader = BufReader::with_capacity(64 * 1024, file);
        let mut lines = 0usize;

        loop {
            let buffer = reader
                .fill_buf()
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if buffer.is_empty() {
                break;
            }
            lines += buffer.iter().filter(|&&b| b == b'\n').count();
            let consumed = buffer.len();
            reader.consume(consumed);
        }

        Ok(lines)
    }

    /// BLAKE3 hex digest of raw file content
    pub fn content_hash(bytes: &[u8]) -> String {
        blake3::hash(bytes).to_hex().to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn test_read_lossy_replaces_invalid_bytes() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("latin1.py");
            fs::write(&path, b"name = 'caf\xe9'\n").unwrap();

            let (text, bytes) = read_lossy(&path).unwrap();
            assert_eq!(bytes.len(), 13);
            assert!(text.contains('\u{FFFD}'));
            assert!(text.starts_with("name = 'caf"));
        }

        #[test]
        fn test_count_lines() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("three.txt");
            fs::write(&path, "a\nb\nc\n").unwrap();
            assert_eq!(count_lines(&path).unwrap(), 3);

            let empty = temp_dir.path().join("empty.txt");
            fs::write(&empty, "").unwrap();
            assert_eq!(count_lines(&empty).unwrap(), 0);

            // No trailing newline: only newline bytes are counted
            let partial = temp_dir.path().join("partial.txt");
            fs::write(&partial, "a\nb").unwrap();
            assert_eq!(count_lines(&partial).unwrap(), 1);
        }

        #[test]
        fn test_count_lines_missing_file() {
            let temp_dir = TempDir::new().unwrap();
            assert!(count_lines(&temp_dir.path().join("nope")).is_err());
        }

        #[test]
        fn test_content_hash_is_stable() {
            let a = content_hash(b"def run(a, b): pass\n");
            let b = content_hash(b"def run(a, b): pass\n");
            assert_eq!(a, b);
            assert_eq!(a.len(), 64);
            assert_ne!(a, content_hash(b""));
        }
    }
}

/// Path conversion utilities (absolute → relative Unix-style)
pub mod paths;

/// Custom ignore pattern utilities (.geniusignore support)
pub mod ignore;
