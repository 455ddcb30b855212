use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    /// Always `true` for error bodies.
    pub error: bool,
    pub status: u16,
    pub message: String,
    /// Seconds until a rate limited caller may retry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<u64>,
}

impl ErrorDto {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            error: true,
            status,
            message: message.into(),
            retry: None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub error: bool,
    pub status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RootDto {
    pub release: String,
    pub revisions: RevisionsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RevisionsDto {
    pub v1: V1RevisionsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct V1RevisionsDto {
    #[serde(rename = "v1-OLD")]
    pub v1_old: String,
    #[serde(rename = "v1-REVISED")]
    pub v1_revised: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub error: bool,
    pub status: u16,
    pub database_ok: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OwnerDto {
    pub id: String,
}
