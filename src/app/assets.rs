//! Static file serving from the public directory.
//!
//! `GET /*path` (router fallback) serves whatever the gallery URLs and the
//! page reference. Only plain relative paths are accepted.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::app::AppState;
use crate::constants::{content_type_for, CACHE_CONTROL_IMMUTABLE, INDEX_FILE};

/// Map a request path onto a path relative to the public directory.
/// The path is percent-decoded first; returns `None` for anything that could
/// escape the directory or is not valid UTF-8.
pub fn sanitize_path(request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let trimmed = decoded.trim_start_matches('/');
    if trimmed.contains('\\') || trimmed.contains('\0') {
        return None;
    }
    if trimmed.split('/').any(|segment| segment == "." || segment == "..") {
        return None;
    }

    let relative = Path::new(trimmed);
    let plain = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !plain {
        return None;
    }

    if trimmed.is_empty() || trimmed.ends_with('/') {
        return Some(relative.join(INDEX_FILE));
    }
    Some(relative.to_path_buf())
}

fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    content_type_for(&extension)
}

pub async fn serve_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(relative) = sanitize_path(uri.path()) else {
        tracing::warn!(path = %uri.path(), "rejected asset path");
        return StatusCode::NOT_FOUND.into_response();
    };
    let full_path = state.public_dir.join(&relative);

    match tokio::fs::metadata(&full_path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!(path = %full_path.display(), error = %e, "failed to stat asset");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }

    match tokio::fs::read(&full_path).await {
        Ok(bytes) => {
            let content_type = content_type(&relative);
            let mut response = Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, content_type);
            if content_type.starts_with("image/") {
                response = response.header(header::CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE);
            }
            response
                .body(Body::from(bytes))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Err(e) => {
            tracing::error!(path = %full_path.display(), error = %e, "failed to serve asset");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
