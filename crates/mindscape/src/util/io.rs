//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write content to a file atomically using write-then-rename.
///
/// The content lands in a sibling `.tmp` file first and is renamed over the
/// target, so an interrupted export never leaves a half-written file behind.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.csv");

        atomic_write(&path, "R,alpha\n1,2\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "R,alpha\n1,2\n");

        // No stray temp file left behind.
        assert!(!dir.path().join("export.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.json");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second");
    }
}
