//! Post entity for SeaORM.
//!
//! Nested SEO, image and derived data live in JSONB columns; only the fields
//! the store filters or orders on get their own columns.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use folio_core::domain::{self, FeaturedImage, PostStatus, SchemaType, SeoMeta, TocEntry};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content_html: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub featured_image: ImageJson,
    pub category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: StringList,
    pub status: Status,
    pub author_id: Option<String>,
    pub schema_type: Schema,
    pub table_of_contents_enabled: bool,
    #[sea_orm(column_type = "JsonBinary")]
    pub seo: SeoJson,
    #[sea_orm(column_type = "JsonBinary")]
    pub internal_links: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub redirect_from: StringList,
    pub word_count: i32,
    pub reading_time: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub table_of_contents: TocJson,
    #[sea_orm(column_type = "JsonBinary")]
    pub search_index: StringList,
    pub publish_date: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "private")]
    Private,
    #[sea_orm(string_value = "archived")]
    Archived,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Schema {
    #[sea_orm(string_value = "Article")]
    Article,
    #[sea_orm(string_value = "BlogPosting")]
    BlogPosting,
    #[sea_orm(string_value = "FAQ")]
    Faq,
    #[sea_orm(string_value = "HowTo")]
    HowTo,
    #[sea_orm(string_value = "CaseStudy")]
    CaseStudy,
    #[sea_orm(string_value = "Review")]
    Review,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ImageJson(pub FeaturedImage);

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SeoJson(pub SeoMeta);

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TocJson(pub Vec<TocEntry>);

impl From<PostStatus> for Status {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => Self::Draft,
            PostStatus::Published => Self::Published,
            PostStatus::Private => Self::Private,
            PostStatus::Archived => Self::Archived,
        }
    }
}

impl From<Status> for PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => Self::Draft,
            Status::Published => Self::Published,
            Status::Private => Self::Private,
            Status::Archived => Self::Archived,
        }
    }
}

impl From<SchemaType> for Schema {
    fn from(schema: SchemaType) -> Self {
        match schema {
            SchemaType::Article => Self::Article,
            SchemaType::BlogPosting => Self::BlogPosting,
            SchemaType::Faq => Self::Faq,
            SchemaType::HowTo => Self::HowTo,
            SchemaType::CaseStudy => Self::CaseStudy,
            SchemaType::Review => Self::Review,
        }
    }
}

impl From<Schema> for SchemaType {
    fn from(schema: Schema) -> Self {
        match schema {
            Schema::Article => Self::Article,
            Schema::BlogPosting => Self::BlogPosting,
            Schema::Faq => Self::Faq,
            Schema::HowTo => Self::HowTo,
            Schema::CaseStudy => Self::CaseStudy,
            Schema::Review => Self::Review,
        }
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            excerpt: model.excerpt,
            content_html: model.content_html,
            featured_image: model.featured_image.0,
            category: model.category,
            tags: model.tags.0,
            status: model.status.into(),
            author_id: model.author_id,
            schema_type: model.schema_type.into(),
            table_of_contents_enabled: model.table_of_contents_enabled,
            seo: model.seo.0,
            internal_links: model.internal_links.0,
            redirect_from: model.redirect_from.0,
            word_count: u32::try_from(model.word_count).unwrap_or_default(),
            reading_time: u32::try_from(model.reading_time).unwrap_or(1),
            table_of_contents: model.table_of_contents.0,
            search_index: model.search_index.0,
            publish_date: model.publish_date.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            version: model.version,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<domain::Post> for ActiveModel {
    fn from(post: domain::Post) -> Self {
        Self {
            id: Set(post.id),
            slug: Set(post.slug),
            title: Set(post.title),
            excerpt: Set(post.excerpt),
            content_html: Set(post.content_html),
            featured_image: Set(ImageJson(post.featured_image)),
            category: Set(post.category),
            tags: Set(StringList(post.tags)),
            status: Set(post.status.into()),
            author_id: Set(post.author_id),
            schema_type: Set(post.schema_type.into()),
            table_of_contents_enabled: Set(post.table_of_contents_enabled),
            seo: Set(SeoJson(post.seo)),
            internal_links: Set(StringList(post.internal_links)),
            redirect_from: Set(StringList(post.redirect_from)),
            word_count: Set(i32::try_from(post.word_count).unwrap_or(i32::MAX)),
            reading_time: Set(i32::try_from(post.reading_time).unwrap_or(i32::MAX)),
            table_of_contents: Set(TocJson(post.table_of_contents)),
            search_index: Set(StringList(post.search_index)),
            publish_date: Set(post.publish_date.map(Into::into)),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            version: Set(post.version),
        }
    }
}
