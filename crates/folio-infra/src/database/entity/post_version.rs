//! Post version snapshot entity.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use folio_core::domain::{Post, VersionRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "post_versions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub post_id: Uuid,
    pub version: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub payload: Snapshot,
    pub created_at: DateTimeWithTimeZone,
}

/// Snapshots outlive the post they were taken from, so no foreign key.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Snapshot(pub Post);

impl From<Model> for VersionRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            version: model.version,
            payload: model.payload.0,
            created_at: model.created_at.into(),
        }
    }
}

impl From<VersionRecord> for ActiveModel {
    fn from(record: VersionRecord) -> Self {
        Self {
            id: Set(record.id),
            post_id: Set(record.post_id),
            version: Set(record.version),
            payload: Set(Snapshot(record.payload)),
            created_at: Set(record.created_at.into()),
        }
    }
}
