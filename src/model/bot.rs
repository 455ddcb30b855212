use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::api::OwnerDto;

/// Public projection of a bot document.
///
/// Has no room for the API token, moderator notes, the vote ledger or the
/// pending-verification flag, so they can never leak through a read.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotDto {
    pub id: String,
    pub name: String,
    pub prefix: String,
    pub library: String,
    #[schema(value_type = Vec<String>)]
    pub tags: Value,
    pub vanity_url: String,
    pub server_count: i64,
    pub shard_count: i64,
    pub flags: i32,
    pub short_desc: String,
    pub long_desc: String,
    #[schema(value_type = Vec<String>)]
    pub editors: Value,
    pub owner: OwnerDto,
    #[schema(value_type = Object)]
    pub avatar: Value,
    #[schema(value_type = Object)]
    pub links: Value,
    #[schema(value_type = Object)]
    pub social: Value,
    #[schema(value_type = Object)]
    pub theme: Value,
    #[schema(value_type = Object)]
    pub widgetbot: Value,
    pub status: BotStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotStatusDto {
    pub approved: bool,
    pub premium: bool,
    pub site_bot: bool,
    pub archived: bool,
    pub verified: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotResponseDto {
    pub error: bool,
    pub status: u16,
    pub bot: BotDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotsResponseDto {
    pub error: bool,
    pub status: u16,
    pub bots: Vec<BotDto>,
}

/// Body accepted by `POST /v1/bot/{id}`.
///
/// `guildCount` is validated by the server, so the schema only documents it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBotStatsDto {
    pub guild_count: i64,
}
