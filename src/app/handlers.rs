use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;
use crate::constants::GALLERY_ERROR_MESSAGE;
use crate::domain::model::GalleryListing;

#[derive(Debug, Serialize)]
pub struct GalleryBody {
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs: Option<Vec<String>>,
    pub count: usize,
}

impl From<GalleryListing> for GalleryBody {
    fn from(listing: GalleryListing) -> Self {
        Self {
            count: listing.count(),
            images: listing.images,
            thumbs: listing.thumbs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GalleryErrorBody {
    pub error: String,
    pub images: Vec<String>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// `GET /api/gallery`
pub async fn gallery(State(state): State<Arc<AppState>>) -> Response {
    let worker = Arc::clone(&state);
    let resolved = tokio::task::spawn_blocking(move || worker.resolver.resolve()).await;

    let error = match resolved {
        Ok(Ok(listing)) => {
            tracing::debug!(count = listing.count(), source = ?listing.source, "gallery resolved");
            return (StatusCode::OK, Json(GalleryBody::from(listing))).into_response();
        }
        Ok(Err(e)) => e.to_string(),
        Err(join_error) => join_error.to_string(),
    };

    tracing::error!(error = %error, "failed to load gallery images");
    let body = GalleryErrorBody {
        error: GALLERY_ERROR_MESSAGE.to_string(),
        images: state.resolver.fallback().to_vec(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
