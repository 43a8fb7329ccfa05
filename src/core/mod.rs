pub mod gallery;

pub use crate::domain::model::{GalleryListing, GallerySource, SlotImage};
pub use crate::domain::ports::AssetDirectory;
pub use crate::utils::error::Result;
pub use gallery::{GalleryResolver, GallerySettings};
