use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path-addressed byte-stream access used by the settings store.
///
/// The store never touches the file system directly; embedding
/// applications supply whatever backing they need (real disk, an
/// archive, a test fixture).
pub trait FileProvider {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The standard provider backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskProvider;

impl FileProvider for DiskProvider {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }
}

/// In-memory provider for tests and ephemeral documents.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without going through the store.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl FileProvider for MemoryProvider {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display())))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_provider_round_trip() {
        let provider = MemoryProvider::new();
        let path = Path::new("settings/sheet_settings.json");
        provider.write(path, b"{}").unwrap();
        assert_eq!(provider.read(path).unwrap(), b"{}");
    }

    #[test]
    fn test_memory_provider_missing_file() {
        let provider = MemoryProvider::new();
        let err = provider.read(Path::new("absent.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_disk_provider_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sheet_settings.json");
        DiskProvider.write(&path, b"{}").unwrap();
        assert_eq!(DiskProvider.read(&path).unwrap(), b"{}");
    }
}
