use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub short_desc: String,
    #[sea_orm(column_type = "Text")]
    pub long_desc: String,
    pub tags: Json,
    pub preview_channel: String,
    pub owner_id: String,
    pub icon: Json,
    pub links: Json,
    pub invite_code: String,
    pub review_required: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
