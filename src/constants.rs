pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";
pub const DEFAULT_PUBLIC_PREFIX: &str = "/images/gallery";
pub const DEFAULT_SLOT_COUNT: usize = 9;
pub const MAX_SLOT_COUNT: usize = 99;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub const GALLERY_ERROR_MESSAGE: &str = "Failed to load gallery images";
pub const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";
pub const INDEX_FILE: &str = "index.html";

/// Content type by lowercase file extension.
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "webp" => "image/webp",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "html" => "text/html; charset=utf-8",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
