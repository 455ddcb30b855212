use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub token: String,
    pub name: String,
    pub prefix: String,
    pub library: String,
    pub tags: Json,
    pub vanity_url: String,
    pub server_count: i64,
    pub shard_count: i64,
    pub flags: i32,
    pub short_desc: String,
    #[sea_orm(column_type = "Text")]
    pub long_desc: String,
    #[sea_orm(column_type = "Text")]
    pub mod_notes: String,
    pub editors: Json,
    pub owner_id: String,
    pub avatar: Json,
    pub votes: Json,
    pub links: Json,
    pub social: Json,
    pub theme: Json,
    pub widgetbot: Json,
    pub approved: bool,
    pub premium: bool,
    pub site_bot: bool,
    pub archived: bool,
    pub verified: bool,
    pub pending_verification: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
