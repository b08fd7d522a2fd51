use sea_orm_migration::prelude::*;

/// Version snapshots and redirect rules. Neither references `posts`, so both
/// survive a post's deletion.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostVersions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PostVersions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PostVersions::PostId).uuid().not_null())
                    .col(ColumnDef::new(PostVersions::Version).integer().not_null())
                    .col(ColumnDef::new(PostVersions::Payload).json_binary().not_null())
                    .col(
                        ColumnDef::new(PostVersions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_post_versions_post_version")
                    .table(PostVersions::Table)
                    .col(PostVersions::PostId)
                    .col(PostVersions::Version)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Redirects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Redirects::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Redirects::PostId).uuid().not_null())
                    .col(ColumnDef::new(Redirects::FromSlug).string().not_null())
                    .col(ColumnDef::new(Redirects::ToSlug).string().not_null())
                    .col(
                        ColumnDef::new(Redirects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_redirects_from_created")
                    .table(Redirects::Table)
                    .col(Redirects::FromSlug)
                    .col(Redirects::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Redirects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostVersions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostVersions {
    Table,
    Id,
    PostId,
    Version,
    Payload,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Redirects {
    Table,
    Id,
    PostId,
    FromSlug,
    ToSlug,
    CreatedAt,
}
