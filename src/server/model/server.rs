//! Server listing domain model.

use serde_json::Value;

use crate::model::{
    api::OwnerDto,
    server::{ServerDto, ServerStatusDto},
};

/// Listed Discord server.
///
/// The invite code and links are only handed out through the website and are
/// stripped by `into_dto`.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub tags: Value,
    pub preview_channel: String,
    pub owner_id: String,
    pub icon: Value,
    pub links: Value,
    pub invite_code: String,
    pub review_required: bool,
}

impl Server {
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            short_desc: self.short_desc,
            long_desc: self.long_desc,
            tags: self.tags,
            preview_channel: self.preview_channel,
            owner: OwnerDto { id: self.owner_id },
            icon: self.icon,
            status: ServerStatusDto {
                review_required: self.review_required,
            },
        }
    }

    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            short_desc: entity.short_desc,
            long_desc: entity.long_desc,
            tags: entity.tags,
            preview_channel: entity.preview_channel,
            owner_id: entity.owner_id,
            icon: entity.icon,
            links: entity.links,
            invite_code: entity.invite_code,
            review_required: entity.review_required,
        }
    }
}
