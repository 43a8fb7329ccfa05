pub mod adapters;
pub mod app;
pub mod config;
pub mod constants;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalAssetDirectory;
pub use app::{router, serve, AppState};
pub use config::{CliArgs, SiteConfig};
pub use core::{GalleryListing, GalleryResolver, GallerySettings};
pub use utils::error::{Result, SiteError};
