use crate::server::{data::bot::BotRepository, model::bot::UpdateServerCountParam};
use entity::prelude::Bot;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::bot::BotFactory};

mod find_account_by_token;
mod update_server_count;
