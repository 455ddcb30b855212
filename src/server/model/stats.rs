//! Directory statistics.
//!
//! Aggregates are computed by folding over the status flags of every bot and the rank
//! flags of every user. Each staff member is counted once under their highest rank, so
//! `staff.total == mods + assistants + admins` always holds.

use crate::{
    model::stats::{BotStatsDto, ServerStatsDto, StaffStatsDto, StatsDto, UserStatsDto},
    server::model::{
        bot::BotStatusFlags,
        user::{StaffLevel, UserRank},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotStats {
    pub total: u64,
    pub approved: u64,
    pub verified: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaffStats {
    pub total: u64,
    pub mods: u64,
    pub assistants: u64,
    pub admins: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub total: u64,
    pub verified: u64,
    pub testers: u64,
    pub translators: u64,
    pub staff: StaffStats,
}

/// Aggregate counts over the whole directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryStats {
    pub servers: u64,
    pub bots: BotStats,
    pub users: UserStats,
}

impl BotStats {
    /// Tallies bot totals from per-bot status flags.
    pub fn tally(flags: &[BotStatusFlags]) -> Self {
        flags.iter().fold(Self::default(), |mut stats, bot| {
            stats.total += 1;
            stats.approved += u64::from(bot.approved);
            stats.verified += u64::from(bot.verified);
            stats
        })
    }
}

impl UserStats {
    /// Tallies user totals from per-user rank flags.
    pub fn tally(ranks: &[UserRank]) -> Self {
        ranks.iter().fold(Self::default(), |mut stats, rank| {
            stats.total += 1;
            stats.verified += u64::from(rank.verified);
            stats.testers += u64::from(rank.tester);
            stats.translators += u64::from(rank.translator);

            if let Some(level) = rank.staff_level() {
                stats.staff.total += 1;
                match level {
                    StaffLevel::Admin => stats.staff.admins += 1,
                    StaffLevel::Assistant => stats.staff.assistants += 1,
                    StaffLevel::Moderator => stats.staff.mods += 1,
                }
            }

            stats
        })
    }
}

impl DirectoryStats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            servers: ServerStatsDto {
                total: self.servers,
            },
            bots: BotStatsDto {
                total: self.bots.total,
                approved: self.bots.approved,
                verified: self.bots.verified,
            },
            users: UserStatsDto {
                total: self.users.total,
                verified: self.users.verified,
                testers: self.users.testers,
                translators: self.users.translators,
                staff: StaffStatsDto {
                    total: self.users.staff.total,
                    mods: self.users.staff.mods,
                    assistants: self.users.staff.assistants,
                    admins: self.users.staff.admins,
                },
            },
        }
    }
}
