use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(string(Server::Id).primary_key())
                    .col(string(Server::Name))
                    .col(string(Server::ShortDesc))
                    .col(text(Server::LongDesc))
                    .col(json(Server::Tags))
                    .col(string(Server::PreviewChannel))
                    .col(string(Server::OwnerId))
                    .col(json(Server::Icon))
                    .col(json(Server::Links))
                    .col(string(Server::InviteCode))
                    .col(boolean(Server::ReviewRequired).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Name,
    ShortDesc,
    LongDesc,
    Tags,
    PreviewChannel,
    OwnerId,
    Icon,
    Links,
    InviteCode,
    ReviewRequired,
}
