//! Redirect rule entity.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::RedirectRule;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "redirects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    #[sea_orm(indexed)]
    pub from_slug: String,
    pub to_slug: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RedirectRule {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            from: model.from_slug,
            to: model.to_slug,
            created_at: model.created_at.into(),
        }
    }
}

impl From<RedirectRule> for ActiveModel {
    fn from(rule: RedirectRule) -> Self {
        Self {
            id: Set(rule.id),
            post_id: Set(rule.post_id),
            from_slug: Set(rule.from),
            to_slug: Set(rule.to),
            created_at: Set(rule.created_at.into()),
        }
    }
}
