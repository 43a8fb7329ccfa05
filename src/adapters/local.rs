use crate::domain::ports::AssetDirectory;
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalAssetDirectory;

impl LocalAssetDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl AssetDirectory for LocalAssetDirectory {
    fn exists(&self, dir: &Path) -> bool {
        dir.exists()
    }

    fn file_names(&self, dir: &Path) -> Result<HashSet<String>> {
        let read_error = |source| SiteError::GalleryReadError {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = HashSet::new();
        for entry in fs::read_dir(dir).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            // non UTF-8 names can never match an image{i} pattern
            if let Ok(name) = entry.file_name().into_string() {
                names.insert(name);
            }
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_entry_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("image1.webp"), b"webp").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"txt").unwrap();
        fs::create_dir(temp_dir.path().join("thumbs")).unwrap();

        let names = LocalAssetDirectory::new().file_names(temp_dir.path()).unwrap();

        assert_eq!(names.len(), 3);
        assert!(names.contains("image1.webp"));
        assert!(names.contains("thumbs"));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gallery");
        let directory = LocalAssetDirectory::new();

        assert!(!directory.exists(&missing));
        assert!(matches!(
            directory.file_names(&missing),
            Err(SiteError::GalleryReadError { .. })
        ));
    }

    #[test]
    fn test_file_in_place_of_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("gallery");
        fs::write(&not_a_dir, b"oops").unwrap();
        let directory = LocalAssetDirectory::new();

        assert!(directory.exists(&not_a_dir));
        assert!(directory.file_names(&not_a_dir).is_err());
    }
}
