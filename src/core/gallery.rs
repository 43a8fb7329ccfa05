//! Gallery resolution.
//!
//! Every slot `i` in `1..=slot_count` maps to at most one file:
//! `image{i}.webp` when present, else `image{i}.jpg`, else nothing.
//! Slots are never padded, so the result is at most `slot_count` long.

use crate::config::SiteConfig;
use crate::domain::model::{GalleryListing, GallerySource, SlotImage};
use crate::domain::ports::AssetDirectory;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Candidate extensions in order of preference.
const PREFERRED_EXTENSIONS: [&str; 2] = ["webp", "jpg"];

/// Pick the preferred file for each slot present in `files`, in slot order.
pub fn select_slots(files: &HashSet<String>, slot_count: usize) -> Vec<SlotImage> {
    (1..=slot_count)
        .filter_map(|slot| {
            PREFERRED_EXTENSIONS
                .iter()
                .map(|ext| format!("image{}.{}", slot, ext))
                .find(|name| files.contains(name))
                .map(|file_name| SlotImage { slot, file_name })
        })
        .collect()
}

pub fn public_url(prefix: &str, file_name: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), file_name)
}

/// Scan `dir` once and select a file per slot.
///
/// Returns `None` when the directory does not exist; read failures are errors.
pub fn scan_slots(
    assets: &dyn AssetDirectory,
    dir: &Path,
    slot_count: usize,
) -> Result<Option<Vec<SlotImage>>> {
    if !assets.exists(dir) {
        return Ok(None);
    }

    let files = assets.file_names(dir)?;
    let selected = select_slots(&files, slot_count);
    tracing::debug!(
        "Resolved {} of {} slots in {} from {} entries",
        selected.len(),
        slot_count,
        dir.display(),
        files.len()
    );
    Ok(Some(selected))
}

pub fn slot_urls(public_prefix: &str, selected: &[SlotImage]) -> Vec<String> {
    selected
        .iter()
        .map(|image| public_url(public_prefix, &image.file_name))
        .collect()
}

/// Resolve the gallery in `dir` to public URLs.
///
/// A missing directory is not an error and yields `fallback` verbatim.
/// Read failures are returned to the caller, who decides how to degrade.
pub fn resolve(
    assets: &dyn AssetDirectory,
    dir: &Path,
    slot_count: usize,
    public_prefix: &str,
    fallback: &[String],
) -> Result<Vec<String>> {
    Ok(match scan_slots(assets, dir, slot_count)? {
        Some(selected) => slot_urls(public_prefix, &selected),
        None => fallback.to_vec(),
    })
}

#[derive(Debug, Clone)]
pub struct GallerySettings {
    pub directory: PathBuf,
    pub public_prefix: String,
    pub slot_count: usize,
    pub thumbs_dir: Option<String>,
    pub fallback_images: Vec<String>,
}

impl GallerySettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            directory: config.gallery_directory(),
            public_prefix: config.public_prefix().to_string(),
            slot_count: config.gallery.slot_count,
            thumbs_dir: config
                .gallery
                .thumbs_dir
                .as_ref()
                .map(|dir| dir.trim_matches('/').to_string()),
            fallback_images: config.gallery.fallback_images.clone(),
        }
    }
}

/// Request-scoped gallery lookup over an [`AssetDirectory`].
///
/// Holds no state between calls; each `resolve` reads the directory again.
#[derive(Clone)]
pub struct GalleryResolver {
    assets: Arc<dyn AssetDirectory>,
    settings: GallerySettings,
}

impl GalleryResolver {
    pub fn new(assets: Arc<dyn AssetDirectory>, settings: GallerySettings) -> Self {
        Self { assets, settings }
    }

    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    pub fn fallback(&self) -> &[String] {
        &self.settings.fallback_images
    }

    pub fn resolve(&self) -> Result<GalleryListing> {
        let settings = &self.settings;

        let Some(selected) =
            scan_slots(self.assets.as_ref(), &settings.directory, settings.slot_count)?
        else {
            tracing::debug!(
                "Gallery directory {} not found, using fallback images",
                settings.directory.display()
            );
            let images = settings.fallback_images.clone();
            return Ok(GalleryListing {
                thumbs: settings.thumbs_dir.as_ref().map(|_| images.clone()),
                images,
                source: GallerySource::Fallback,
            });
        };

        let images = slot_urls(&settings.public_prefix, &selected);
        let thumbs = match &settings.thumbs_dir {
            Some(thumbs_dir) => Some(self.resolve_thumbs(thumbs_dir, &selected, &images)?),
            None => None,
        };

        Ok(GalleryListing {
            images,
            thumbs,
            source: GallerySource::Directory,
        })
    }

    /// One thumbnail per selected image; a slot without a thumbnail reuses
    /// its full-size URL. A missing thumbnail directory is not an error.
    fn resolve_thumbs(
        &self,
        thumbs_dir: &str,
        selected: &[SlotImage],
        images: &[String],
    ) -> Result<Vec<String>> {
        let settings = &self.settings;
        let dir = settings.directory.join(thumbs_dir);
        let thumbs_by_slot =
            scan_slots(self.assets.as_ref(), &dir, settings.slot_count)?.unwrap_or_default();
        let thumb_prefix = public_url(&settings.public_prefix, thumbs_dir);

        Ok(selected
            .iter()
            .zip(images)
            .map(|(image, image_url)| {
                thumbs_by_slot
                    .iter()
                    .find(|thumb| thumb.slot == image.slot)
                    .map(|thumb| public_url(&thumb_prefix, &thumb.file_name))
                    .unwrap_or_else(|| image_url.clone())
            })
            .collect())
    }
}
