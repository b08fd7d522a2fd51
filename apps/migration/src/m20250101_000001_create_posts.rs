use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::Slug).string().not_null())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Excerpt).text().not_null())
                    .col(ColumnDef::new(Posts::ContentHtml).text().not_null())
                    .col(ColumnDef::new(Posts::FeaturedImage).json_binary().not_null())
                    .col(ColumnDef::new(Posts::Category).string().not_null())
                    .col(ColumnDef::new(Posts::Tags).json_binary().not_null())
                    .col(ColumnDef::new(Posts::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Posts::AuthorId).string().null())
                    .col(ColumnDef::new(Posts::SchemaType).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Posts::TableOfContentsEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Posts::Seo).json_binary().not_null())
                    .col(ColumnDef::new(Posts::InternalLinks).json_binary().not_null())
                    .col(ColumnDef::new(Posts::RedirectFrom).json_binary().not_null())
                    .col(ColumnDef::new(Posts::WordCount).integer().not_null().default(0))
                    .col(ColumnDef::new(Posts::ReadingTime).integer().not_null().default(1))
                    .col(ColumnDef::new(Posts::TableOfContents).json_binary().not_null())
                    .col(ColumnDef::new(Posts::SearchIndex).json_binary().not_null())
                    .col(ColumnDef::new(Posts::PublishDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Posts::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Posts::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Posts::Version).integer().not_null().default(1))
                    .to_owned(),
            )
            .await?;

        // Slugs are not unique at the storage layer; an index keeps lookups cheap.
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_slug")
                    .table(Posts::Table)
                    .col(Posts::Slug)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_status_publish_date")
                    .table(Posts::Table)
                    .col(Posts::Status)
                    .col(Posts::PublishDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Slug,
    Title,
    Excerpt,
    ContentHtml,
    FeaturedImage,
    Category,
    Tags,
    Status,
    AuthorId,
    SchemaType,
    TableOfContentsEnabled,
    Seo,
    InternalLinks,
    RedirectFrom,
    WordCount,
    ReadingTime,
    TableOfContents,
    SearchIndex,
    PublishDate,
    CreatedAt,
    UpdatedAt,
    Version,
}
