//! Mapping from wire payloads to domain inputs.

use folio_core::domain::{FeaturedImage, OpenGraph, PostInput, RobotsInput, SeoInput};
use folio_shared::dto::{ImageDto, ImagePayload, OpenGraphPayload, PostPayload, SeoPayload};

fn image(image: ImagePayload) -> FeaturedImage {
    match image {
        ImagePayload::Url(url) => FeaturedImage::new(url, ""),
        ImagePayload::Full(ImageDto {
            url,
            alt,
            width,
            height,
        }) => FeaturedImage {
            url,
            alt,
            width,
            height,
        },
    }
}

fn open_graph(og: OpenGraphPayload) -> OpenGraph {
    OpenGraph {
        title: og.title,
        description: og.description,
        image: og.image.map(image),
    }
}

fn seo(seo: SeoPayload) -> SeoInput {
    SeoInput {
        seo_title: seo.seo_title,
        meta_description: seo.meta_description,
        focus_keyword: seo.focus_keyword,
        secondary_keywords: seo.secondary_keywords,
        canonical_url: seo.canonical_url,
        robots: seo.robots.map(|r| RobotsInput {
            index: r.index,
            follow: r.follow,
        }),
        open_graph: seo.open_graph.map(open_graph),
    }
}

/// The nested image wins; the flat `featuredImageUrl`/`featuredImageAlt`
/// pair fills whatever it leaves empty.
fn featured_image(
    nested: Option<ImagePayload>,
    flat_url: Option<String>,
    flat_alt: Option<String>,
) -> Option<FeaturedImage> {
    let mut featured = nested.map(image);
    if flat_url.is_none() && flat_alt.is_none() {
        return featured;
    }

    let target = featured.get_or_insert_with(FeaturedImage::default);
    if let Some(url) = flat_url.filter(|_| target.url.is_empty()) {
        target.url = url;
    }
    if let Some(alt) = flat_alt.filter(|_| target.alt.is_empty()) {
        target.alt = alt;
    }
    featured
}

pub fn into_input(payload: PostPayload) -> PostInput {
    PostInput {
        title: payload.title,
        slug: payload.slug,
        override_slug: payload.override_slug,
        excerpt: payload.excerpt,
        content_html: payload.content_html,
        featured_image: featured_image(
            payload.featured_image,
            payload.featured_image_url,
            payload.featured_image_alt,
        ),
        category: payload.category,
        tags: payload.tags,
        status: payload.status,
        author_id: payload.author_id,
        schema_type: payload.schema_type,
        table_of_contents_enabled: payload.table_of_contents_enabled,
        seo: payload.seo.map(seo),
        internal_links: payload.internal_links,
        publish_date: payload.publish_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_fields_fill_a_url_only_image() {
        let image = featured_image(
            Some(ImagePayload::Url("https://cdn.example/a.webp".into())),
            None,
            Some("Chart of rankings".into()),
        )
        .unwrap();

        assert_eq!(image.url, "https://cdn.example/a.webp");
        assert_eq!(image.alt, "Chart of rankings");
    }

    #[test]
    fn missing_image_stays_missing() {
        assert!(featured_image(None, None, None).is_none());
    }

    #[test]
    fn seo_block_maps_robots_and_og() {
        let payload: PostPayload = serde_json::from_str(
            r#"{"seo": {"seoTitle": "T", "robots": {"index": "noindex"}, "openGraph": {"title": "OG"}}}"#,
        )
        .unwrap();

        let input = into_input(payload);
        let seo = input.seo.unwrap();
        let robots = seo.robots.unwrap();
        assert_eq!(robots.index, "noindex");
        assert_eq!(robots.follow, "follow");
        assert_eq!(seo.open_graph.unwrap().title, "OG");
    }
}
