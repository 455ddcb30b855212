use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bot::Table)
                    .if_not_exists()
                    .col(string(Bot::Id).primary_key())
                    .col(string_uniq(Bot::Token))
                    .col(string(Bot::Name))
                    .col(string(Bot::Prefix))
                    .col(string(Bot::Library))
                    .col(json(Bot::Tags))
                    .col(string(Bot::VanityUrl))
                    .col(big_integer(Bot::ServerCount).default(0))
                    .col(big_integer(Bot::ShardCount).default(0))
                    .col(integer(Bot::Flags).default(0))
                    .col(string(Bot::ShortDesc))
                    .col(text(Bot::LongDesc))
                    .col(text(Bot::ModNotes))
                    .col(json(Bot::Editors))
                    .col(string(Bot::OwnerId))
                    .col(json(Bot::Avatar))
                    .col(json(Bot::Votes))
                    .col(json(Bot::Links))
                    .col(json(Bot::Social))
                    .col(json(Bot::Theme))
                    .col(json(Bot::Widgetbot))
                    .col(boolean(Bot::Approved).default(false))
                    .col(boolean(Bot::Premium).default(false))
                    .col(boolean(Bot::SiteBot).default(false))
                    .col(boolean(Bot::Archived).default(false))
                    .col(boolean(Bot::Verified).default(false))
                    .col(boolean(Bot::PendingVerification).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bot {
    Table,
    Id,
    Token,
    Name,
    Prefix,
    Library,
    Tags,
    VanityUrl,
    ServerCount,
    ShardCount,
    Flags,
    ShortDesc,
    LongDesc,
    ModNotes,
    Editors,
    OwnerId,
    Avatar,
    Votes,
    Links,
    Social,
    Theme,
    Widgetbot,
    Approved,
    Premium,
    SiteBot,
    Archived,
    Verified,
    PendingVerification,
}
