use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Public projection of a user document.
///
/// Token, locale, preferences, account status and staff tracking are withheld.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub discrim: String,
    pub full_username: String,
    pub flags: i32,
    #[schema(value_type = Object)]
    pub avatar: Value,
    #[schema(value_type = Object)]
    pub profile: Value,
    #[schema(value_type = Object)]
    pub game: Value,
    pub rank: UserRankDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserRankDto {
    pub admin: bool,
    pub assistant: bool,
    #[serde(rename = "mod")]
    pub moderator: bool,
    pub premium: bool,
    pub tester: bool,
    pub translator: bool,
    pub verified: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserResponseDto {
    pub error: bool,
    pub status: u16,
    pub user: UserDto,
}
