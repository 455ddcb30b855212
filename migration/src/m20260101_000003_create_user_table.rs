use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_null(User::Token))
                    .col(string(User::Name))
                    .col(string(User::Discrim))
                    .col(string(User::FullUsername))
                    .col(string(User::Locale))
                    .col(integer(User::Flags).default(0))
                    .col(json(User::Avatar))
                    .col(json(User::Preferences))
                    .col(json(User::Profile))
                    .col(json(User::Game))
                    .col(boolean(User::RankAdmin).default(false))
                    .col(boolean(User::RankAssistant).default(false))
                    .col(boolean(User::RankMod).default(false))
                    .col(boolean(User::RankPremium).default(false))
                    .col(boolean(User::RankTester).default(false))
                    .col(boolean(User::RankTranslator).default(false))
                    .col(boolean(User::RankVerified).default(false))
                    .col(json(User::Status))
                    .col(json(User::StaffTracking))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Token,
    Name,
    Discrim,
    FullUsername,
    Locale,
    Flags,
    Avatar,
    Preferences,
    Profile,
    Game,
    RankAdmin,
    RankAssistant,
    RankMod,
    RankPremium,
    RankTester,
    RankTranslator,
    RankVerified,
    Status,
    StaffTracking,
}
