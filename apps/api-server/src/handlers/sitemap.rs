//! Crawler-facing documents.

use actix_web::{HttpResponse, web};

use folio_core::ports::Cache;
use folio_infra::SITEMAP_CACHE_KEY;

use crate::state::AppState;

/// GET /sitemap.xml
///
/// Rendered on every request so scheduled posts show up as soon as their
/// publish date passes. If the store is down the last published copy is
/// served, and failing that the static pages alone.
pub async fn sitemap_xml(state: web::Data<AppState>) -> HttpResponse {
    let xml = match state.sitemap.render().await {
        Ok(xml) => xml,
        Err(e) => match state.cache.get(SITEMAP_CACHE_KEY).await {
            Some(xml) => {
                tracing::warn!(error = %e, "Sitemap render failed, serving cached copy");
                xml
            }
            None => {
                tracing::warn!(error = %e, "Sitemap render failed, serving static pages only");
                state.sitemap.builder().build(&[], chrono::Utc::now())
            }
        },
    };

    HttpResponse::Ok()
        .content_type("application/xml")
        .body(xml)
}

/// GET /robots.txt
pub async fn robots_txt(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(state.sitemap.builder().robots_txt())
}
