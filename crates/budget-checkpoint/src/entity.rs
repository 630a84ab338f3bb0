//! Trackable entity kinds and their persisted key mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain entity kinds tracked by the sync engine.
///
/// Each kind synchronizes independently and at its own cadence, so each owns
/// at most one checkpoint cell. Adding a kind means adding a variant and its
/// key below; no shared schema migration is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Budget,
    BudgetLimit,
    UserGroup,
}

impl EntityKind {
    /// Every trackable kind, for enumeration.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::User,
        EntityKind::Budget,
        EntityKind::BudgetLimit,
        EntityKind::UserGroup,
    ];

    /// The persisted key for this kind's checkpoint cell.
    ///
    /// Defined once here so writer and reader can never drift apart on key
    /// naming.
    pub const fn storage_key(self) -> &'static str {
        match self {
            EntityKind::User => "user_timestamp",
            EntityKind::Budget => "budget_timestamp",
            EntityKind::BudgetLimit => "budget_limit_timestamp",
            EntityKind::UserGroup => "user_group_timestamp",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Budget => write!(f, "budget"),
            EntityKind::BudgetLimit => write!(f, "budget_limit"),
            EntityKind::UserGroup => write!(f, "user_group"),
        }
    }
}
