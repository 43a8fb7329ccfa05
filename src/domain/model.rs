use serde::Serialize;

/// Where a gallery listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySource {
    Directory,
    Fallback,
}

/// One resolved slot: its 1-based index and the chosen file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotImage {
    pub slot: usize,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryListing {
    pub images: Vec<String>,
    /// Parallel to `images` when thumbnails are configured.
    pub thumbs: Option<Vec<String>>,
    pub source: GallerySource,
}

impl GalleryListing {
    pub fn count(&self) -> usize {
        self.images.len()
    }
}
