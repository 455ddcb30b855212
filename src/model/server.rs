use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::api::OwnerDto;

/// Public projection of a server document; invite code and links are withheld.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerDto {
    pub id: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    #[schema(value_type = Vec<String>)]
    pub tags: Value,
    pub preview_channel: String,
    pub owner: OwnerDto,
    #[schema(value_type = Object)]
    pub icon: Value,
    pub status: ServerStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusDto {
    pub review_required: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerResponseDto {
    pub error: bool,
    pub status: u16,
    pub server: ServerDto,
}
