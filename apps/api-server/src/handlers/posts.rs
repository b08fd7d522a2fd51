//! Post CRUD, history and discovery handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use folio_core::domain::{PostFilter, PostStatus};
use folio_shared::dto::{DeleteResponse, PostListQuery, PostPayload};

use super::payload::into_input;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid post id: {raw}")))
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let status = query
        .status
        .as_deref()
        .map(str::parse::<PostStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let filter = PostFilter {
        status,
        category: query.category,
        author_id: query.author_id,
    };
    let posts = state.posts.list_all(&filter).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/published
pub async fn list_published(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.list_published().await?))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(into_input(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {id} not found")))?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/slug/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .posts
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with slug {slug} not found")))?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.update(id, into_input(body.into_inner())).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(DeleteResponse {
        ok: true,
        id: id.to_string(),
    }))
}

/// POST /api/posts/{id}/duplicate
pub async fn duplicate(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let copy = state.posts.duplicate(id).await?;

    Ok(HttpResponse::Created().json(copy))
}

/// GET /api/posts/{id}/versions
pub async fn versions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    Ok(HttpResponse::Ok().json(state.posts.versions(id).await?))
}

/// POST /api/posts/{id}/versions/{version}/restore
pub async fn restore(
    state: web::Data<AppState>,
    path: web::Path<(String, i32)>,
) -> AppResult<HttpResponse> {
    let (raw_id, version) = path.into_inner();
    let id = parse_id(&raw_id)?;

    Ok(HttpResponse::Ok().json(state.posts.restore(id, version).await?))
}

/// GET /api/posts/{id}/related - accepts an id or a slug.
pub async fn related(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.related(&path).await?))
}
