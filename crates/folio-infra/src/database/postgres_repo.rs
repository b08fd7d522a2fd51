//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use folio_core::domain::{Post, PostFilter, PostStatus, RedirectRule, VersionRecord};
use folio_core::error::RepoError;
use folio_core::ports::{PostRepository, RedirectRepository, VersionRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_version::{self, Entity as VersionEntity};
use super::entity::redirect::{self, Entity as RedirectEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL version history.
pub type PostgresVersionRepository = PostgresBaseRepository<VersionEntity>;

/// PostgreSQL redirect log.
pub type PostgresRedirectRepository = PostgresBaseRepository<RedirectEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(%slug, "Finding post by slug");

        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();
        if let Some(status) = filter.status {
            query = query.filter(post::Column::Status.eq(post::Status::from(status)));
        }
        if let Some(category) = &filter.category {
            query = query.filter(post::Column::Category.eq(category.as_str()));
        }
        if let Some(author_id) = &filter.author_id {
            query = query.filter(post::Column::AuthorId.eq(author_id.as_str()));
        }

        let result = query
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Status.eq(post::Status::from(status)))
            .order_by_desc(post::Column::PublishDate)
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl VersionRepository for PostgresVersionRepository {
    async fn append(&self, record: VersionRecord) -> Result<VersionRecord, RepoError> {
        let active_model: post_version::ActiveModel = record.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find(&self, post_id: Uuid, version: i32) -> Result<Option<VersionRecord>, RepoError> {
        let result = VersionEntity::find()
            .filter(post_version::Column::PostId.eq(post_id))
            .filter(post_version::Column::Version.eq(version))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<VersionRecord>, RepoError> {
        let result = VersionEntity::find()
            .filter(post_version::Column::PostId.eq(post_id))
            .order_by_desc(post_version::Column::Version)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl RedirectRepository for PostgresRedirectRepository {
    async fn append(&self, rule: RedirectRule) -> Result<RedirectRule, RepoError> {
        let active_model: redirect::ActiveModel = rule.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn latest_from(&self, slug: &str) -> Result<Option<RedirectRule>, RepoError> {
        let result = RedirectEntity::find()
            .filter(redirect::Column::FromSlug.eq(slug))
            .order_by_desc(redirect::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<RedirectRule>, RepoError> {
        let result = RedirectEntity::find()
            .filter(redirect::Column::PostId.eq(post_id))
            .order_by_asc(redirect::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
