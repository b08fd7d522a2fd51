//! HTTP handlers and route configuration.

mod health;
mod links;
mod media;
mod payload;
mod posts;
mod sitemap;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sitemap.xml", web::get().to(sitemap::sitemap_xml))
        .route("/robots.txt", web::get().to(sitemap::robots_txt))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .route("/redirect", web::get().to(links::redirect))
                .route("/internal-links", web::get().to(links::internal_links))
                .service(
                    web::resource("/media")
                        .app_data(web::PayloadConfig::new(media::MAX_UPLOAD_BYTES))
                        .route(web::get().to(media::list))
                        .route(web::post().to(media::upload)),
                )
                // Post routes; fixed segments before `{id}`
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list))
                        .route("", web::post().to(posts::create))
                        .route("/published", web::get().to(posts::list_published))
                        .route("/slug/{slug}", web::get().to(posts::get_by_slug))
                        .route("/{id}", web::get().to(posts::get))
                        .route("/{id}", web::put().to(posts::update))
                        .route("/{id}", web::delete().to(posts::delete))
                        .route("/{id}/duplicate", web::post().to(posts::duplicate))
                        .route("/{id}/versions", web::get().to(posts::versions))
                        .route(
                            "/{id}/versions/{version}/restore",
                            web::post().to(posts::restore),
                        )
                        .route("/{id}/related", web::get().to(posts::related)),
                ),
        );
}
