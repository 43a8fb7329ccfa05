use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::Path;

/// Read-only view of a directory of public assets.
pub trait AssetDirectory: Send + Sync {
    fn exists(&self, dir: &Path) -> bool;

    /// Names of the entries directly inside `dir`, read fresh on every call.
    fn file_names(&self, dir: &Path) -> Result<HashSet<String>>;
}
