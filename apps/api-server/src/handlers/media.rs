//! Media upload and listing.
//!
//! Uploads are raw request bodies; the filename travels in the query string
//! and the type in `Content-Type`.

use actix_web::{HttpRequest, HttpResponse, http::header, web};

use folio_shared::dto::{MediaItem, MediaQuery, MediaUploadResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// GET /api/media?postId=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<MediaQuery>,
) -> AppResult<HttpResponse> {
    let items: Vec<MediaItem> = state
        .media
        .list(&query.post_id)
        .await?
        .into_iter()
        .map(|object| MediaItem {
            name: object.key,
            url: object.url,
        })
        .collect();

    Ok(HttpResponse::Ok().json(items))
}

/// POST /api/media?postId=&filename=
pub async fn upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<MediaQuery>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filename = query
        .filename
        .ok_or_else(|| AppError::BadRequest("filename is required".to_string()))?;
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    let url = state
        .media
        .upload(&query.post_id, &filename, body.to_vec(), content_type)
        .await?;

    Ok(HttpResponse::Created().json(MediaUploadResponse { url }))
}
