use serde_json::{json, Value};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use wedding_site::domain::ports::AssetDirectory;
use wedding_site::{AppState, SiteConfig, SiteError};

async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = wedding_site::router(Arc::new(state));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config_for(public_dir: &Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.server.public_dir = public_dir.to_str().unwrap().to_string();
    config
}

fn touch(dir: &Path, files: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    for file in files {
        std::fs::write(dir.join(file), file.as_bytes()).unwrap();
    }
}

async fn get_json(addr: SocketAddr, path: &str) -> (u16, Value) {
    let response = reqwest::get(format!("http://{}{}", addr, path)).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_gallery_prefers_webp_per_slot() {
    let temp_dir = TempDir::new().unwrap();
    touch(
        &temp_dir.path().join("images/gallery"),
        &["image1.webp", "image2.jpg", "image3.webp", "image3.jpg"],
    );
    let addr = spawn_server(AppState::from_config(&config_for(temp_dir.path()))).await;

    let (status, body) = get_json(addr, "/api/gallery").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "images": [
                "/images/gallery/image1.webp",
                "/images/gallery/image2.jpg",
                "/images/gallery/image3.webp"
            ],
            "count": 3
        })
    );
}

#[tokio::test]
async fn test_gallery_missing_directory_returns_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(temp_dir.path());
    config.gallery.fallback_images = vec![
        "/images/gallery/image1.webp".to_string(),
        "https://cdn.example.com/cover.jpg".to_string(),
    ];
    let addr = spawn_server(AppState::from_config(&config)).await;

    let (status, body) = get_json(addr, "/api/gallery").await;

    assert_eq!(status, 200);
    assert_eq!(
        body["images"],
        json!(["/images/gallery/image1.webp", "https://cdn.example.com/cover.jpg"])
    );
    assert_eq!(body["count"], 2);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_gallery_without_matching_files_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    touch(
        &temp_dir.path().join("images/gallery"),
        &["cover.webp", "image1.png", "image10.webp"],
    );
    let addr = spawn_server(AppState::from_config(&config_for(temp_dir.path()))).await;

    let (status, body) = get_json(addr, "/api/gallery").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "images": [], "count": 0 }));
}

#[tokio::test]
async fn test_gallery_read_failure_returns_500_with_fallback() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("images")).unwrap();
    // a plain file where the directory should be: exists, but cannot be listed
    std::fs::write(temp_dir.path().join("images/gallery"), b"not a directory").unwrap();
    let addr = spawn_server(AppState::from_config(&config_for(temp_dir.path()))).await;

    let (status, body) = get_json(addr, "/api/gallery").await;

    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to load gallery images");
    assert_eq!(
        body["images"],
        json!([
            "/images/gallery/image1.webp",
            "/images/gallery/image2.webp",
            "/images/gallery/image3.webp"
        ])
    );
}

struct DeniedDirectory;

impl AssetDirectory for DeniedDirectory {
    fn exists(&self, _dir: &Path) -> bool {
        true
    }

    fn file_names(&self, dir: &Path) -> wedding_site::Result<HashSet<String>> {
        Err(SiteError::GalleryReadError {
            path: dir.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

#[tokio::test]
async fn test_gallery_permission_error_uses_configured_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(temp_dir.path());
    config.gallery.fallback_images = vec!["/images/gallery/image9.jpg".to_string()];
    let addr = spawn_server(AppState::new(&config, Arc::new(DeniedDirectory))).await;

    let (status, body) = get_json(addr, "/api/gallery").await;

    assert_eq!(status, 500);
    assert_eq!(body["images"], json!(["/images/gallery/image9.jpg"]));
}

#[tokio::test]
async fn test_gallery_with_thumbnails_and_custom_slot_count() {
    let temp_dir = TempDir::new().unwrap();
    let gallery = temp_dir.path().join("images/gallery");
    touch(&gallery, &["image1.webp", "image2.jpg", "image3.webp"]);
    touch(&gallery.join("thumbs"), &["image1.webp", "image3.jpg"]);
    let mut config = config_for(temp_dir.path());
    config.gallery.slot_count = 2;
    config.gallery.thumbs_dir = Some("thumbs".to_string());
    let addr = spawn_server(AppState::from_config(&config)).await;

    let (status, body) = get_json(addr, "/api/gallery").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "images": ["/images/gallery/image1.webp", "/images/gallery/image2.jpg"],
            "thumbs": ["/images/gallery/thumbs/image1.webp", "/images/gallery/image2.jpg"],
            "count": 2
        })
    );
}

#[tokio::test]
async fn test_gallery_reflects_directory_changes_between_requests() {
    let temp_dir = TempDir::new().unwrap();
    let gallery = temp_dir.path().join("images/gallery");
    touch(&gallery, &["image1.jpg"]);
    let addr = spawn_server(AppState::from_config(&config_for(temp_dir.path()))).await;

    let (_, before) = get_json(addr, "/api/gallery").await;
    touch(&gallery, &["image1.webp", "image2.jpg"]);
    let (_, after) = get_json(addr, "/api/gallery").await;

    assert_eq!(before["images"], json!(["/images/gallery/image1.jpg"]));
    assert_eq!(
        after["images"],
        json!(["/images/gallery/image1.webp", "/images/gallery/image2.jpg"])
    );
}
