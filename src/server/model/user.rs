//! User domain models.
//!
//! Provides the public user profile model and the rank flags used both for the
//! profile and for staff statistics. Staff ranks are hierarchical: an admin also
//! holds the assistant and mod ranks, an assistant also holds mod.

use serde_json::Value;

use crate::model::user::{UserDto, UserRankDto};

/// Site user with profile, rank flags and private account data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub discrim: String,
    pub full_username: String,
    pub flags: i32,
    pub avatar: Value,
    pub profile: Value,
    pub game: Value,
    pub rank: UserRank,
    /// Private: interface locale.
    pub locale: String,
    /// Private: site preferences.
    pub preferences: Value,
    /// Private: ban and account status.
    pub status: Value,
    /// Private: staff activity tracking.
    pub staff_tracking: Value,
}

/// Rank flags of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserRank {
    pub admin: bool,
    pub assistant: bool,
    pub moderator: bool,
    pub premium: bool,
    pub tester: bool,
    pub translator: bool,
    pub verified: bool,
}

/// Highest staff rank held by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StaffLevel {
    Moderator,
    Assistant,
    Admin,
}

impl UserRank {
    /// Resolves the user's highest staff rank.
    ///
    /// # Returns
    /// - `Some(StaffLevel)` - Highest of admin, assistant and mod the user holds
    /// - `None` - User is not staff
    pub fn staff_level(&self) -> Option<StaffLevel> {
        if self.admin {
            Some(StaffLevel::Admin)
        } else if self.assistant {
            Some(StaffLevel::Assistant)
        } else if self.moderator {
            Some(StaffLevel::Moderator)
        } else {
            None
        }
    }

    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            admin: entity.rank_admin,
            assistant: entity.rank_assistant,
            moderator: entity.rank_mod,
            premium: entity.rank_premium,
            tester: entity.rank_tester,
            translator: entity.rank_translator,
            verified: entity.rank_verified,
        }
    }

    fn into_dto(self) -> UserRankDto {
        UserRankDto {
            admin: self.admin,
            assistant: self.assistant,
            moderator: self.moderator,
            premium: self.premium,
            tester: self.tester,
            translator: self.translator,
            verified: self.verified,
        }
    }
}

impl User {
    /// Converts the user to its public projection.
    ///
    /// The token never reaches this model; locale, preferences, status and staff
    /// tracking are dropped here.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            discrim: self.discrim,
            full_username: self.full_username,
            flags: self.flags,
            avatar: self.avatar,
            profile: self.profile,
            game: self.game,
            rank: self.rank.into_dto(),
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        let rank = UserRank::from_entity(&entity);

        Self {
            id: entity.id,
            name: entity.name,
            discrim: entity.discrim,
            full_username: entity.full_username,
            flags: entity.flags,
            avatar: entity.avatar,
            profile: entity.profile,
            game: entity.game,
            rank,
            locale: entity.locale,
            preferences: entity.preferences,
            status: entity.status,
            staff_tracking: entity.staff_tracking,
        }
    }
}
