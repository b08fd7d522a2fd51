//! Editor helpers: internal-link suggestions and redirect lookup.

use actix_web::{HttpResponse, web};

use folio_shared::dto::{InternalLinksQuery, RedirectQuery, RedirectResponse};

use super::posts::parse_id;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/internal-links?q=
pub async fn internal_links(
    state: web::Data<AppState>,
    query: web::Query<InternalLinksQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let exclude = query.exclude.as_deref().map(parse_id).transpose()?;
    let suggestions = state.links.suggest(query.q.as_deref(), exclude).await?;

    Ok(HttpResponse::Ok().json(suggestions))
}

/// GET /api/redirect?slug=&path=
///
/// Always 200; `destination` is null when no rule matches.
pub async fn redirect(
    state: web::Data<AppState>,
    query: web::Query<RedirectQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let slug = query.slug.as_deref().filter(|s| !s.is_empty());
    let path = query.path.as_deref().filter(|p| !p.is_empty());

    let destination = state.redirects.lookup(slug, path).await?;
    if let Some(target) = &destination {
        tracing::debug!(?slug, ?path, %target, "Redirect resolved");
    }

    Ok(HttpResponse::Ok().json(RedirectResponse { destination }))
}
