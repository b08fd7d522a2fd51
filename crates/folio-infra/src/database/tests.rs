use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use folio_core::domain::{FeaturedImage, Post, PostStatus, RedirectRule, SeoMeta};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, PostRepository, RedirectRepository};

use crate::database::entity::post::{self, ImageJson, Schema, SeoJson, Status, StringList, TocJson};
use crate::database::entity::redirect;
use crate::database::postgres_repo::{PostgresPostRepository, PostgresRedirectRepository};

fn post_model(id: Uuid, slug: &str, status: Status) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        slug: slug.to_owned(),
        title: "Test Post".to_owned(),
        excerpt: "Excerpt".to_owned(),
        content_html: "<h2>Intro</h2><p>Content</p>".to_owned(),
        featured_image: ImageJson(FeaturedImage::new("https://cdn.example/a.webp", "Alt")),
        category: "seo".to_owned(),
        tags: StringList(vec!["local".to_owned(), "maps".to_owned()]),
        status,
        author_id: None,
        schema_type: Schema::Faq,
        table_of_contents_enabled: true,
        seo: SeoJson(SeoMeta::default()),
        internal_links: StringList::default(),
        redirect_from: StringList(vec!["old-slug".to_owned()]),
        word_count: 2,
        reading_time: 1,
        table_of_contents: TocJson::default(),
        search_index: StringList::default(),
        publish_date: Some(now.into()),
        created_at: now.into(),
        updated_at: now.into(),
        version: 3,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, "hello-world", Status::Published)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.id, post_id);
    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.status, PostStatus::Published);
    assert_eq!(post.tags, vec!["local", "maps"]);
    assert_eq!(post.redirect_from, vec!["old-slug"]);
    assert_eq!(post.version, 3);
}

#[tokio::test]
async fn test_list_by_status_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(Uuid::new_v4(), "newer", Status::Published),
            post_model(Uuid::new_v4(), "older", Status::Published),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list_by_status(PostStatus::Published).await.unwrap();

    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_latest_redirect_rule() {
    let post_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![redirect::Model {
            id: Uuid::new_v4(),
            post_id,
            from_slug: "a".to_owned(),
            to_slug: "c".to_owned(),
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresRedirectRepository::new(db);
    let rule = repo.latest_from("a").await.unwrap().expect("rule");

    assert_eq!(rule.post_id, post_id);
    assert_eq!(rule.to, "c");
}

#[tokio::test]
async fn test_append_redirect_returns_stored_rule() {
    let rule = RedirectRule {
        id: Uuid::new_v4(),
        post_id: Uuid::new_v4(),
        from: "hello-world".to_owned(),
        to: "hello-world-2".to_owned(),
        created_at: Utc::now(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![redirect::Model {
            id: rule.id,
            post_id: rule.post_id,
            from_slug: rule.from.clone(),
            to_slug: rule.to.clone(),
            created_at: rule.created_at.into(),
        }]])
        .into_connection();

    let repo = PostgresRedirectRepository::new(db);
    let stored = repo.append(rule.clone()).await.unwrap();

    assert_eq!(stored.from, "hello-world");
    assert_eq!(stored.to, "hello-world-2");
}
