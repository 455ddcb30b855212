use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub token: Option<String>,
    pub name: String,
    pub discrim: String,
    pub full_username: String,
    pub locale: String,
    pub flags: i32,
    pub avatar: Json,
    pub preferences: Json,
    pub profile: Json,
    pub game: Json,
    pub rank_admin: bool,
    pub rank_assistant: bool,
    pub rank_mod: bool,
    pub rank_premium: bool,
    pub rank_tester: bool,
    pub rank_translator: bool,
    pub rank_verified: bool,
    pub status: Json,
    pub staff_tracking: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
