use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatsResponseDto {
    pub error: bool,
    pub status: u16,
    pub stats: StatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatsDto {
    pub servers: ServerStatsDto,
    pub bots: BotStatsDto,
    pub users: UserStatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerStatsDto {
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotStatsDto {
    pub total: u64,
    pub approved: u64,
    pub verified: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserStatsDto {
    pub total: u64,
    pub verified: u64,
    pub testers: u64,
    pub translators: u64,
    pub staff: StaffStatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StaffStatsDto {
    pub total: u64,
    pub mods: u64,
    pub assistants: u64,
    pub admins: u64,
}
