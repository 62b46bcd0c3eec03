//! Roster domain module (players and teams, event-sourced).
//!
//! This crate contains business rules for players, teams and the assignment
//! relationship between them, implemented purely as deterministic domain
//! logic (no IO, no storage).
//!
//! The relationship is denormalized: a team records the players on its roster
//! and each player records the teams it plays for, so either aggregate can be
//! loaded and listed on its own.

pub mod player;
pub mod summary;
pub mod team;

pub use player::{
    Player, PlayerActivated, PlayerCreated, PlayerDeactivated, PlayerEvent, TeamAssignedToPlayer,
    TeamUnassignedFromPlayer,
};
pub use summary::{PlayerSummary, TeamSummary};
pub use team::{
    PlayerAssignedToTeam, PlayerUnassignedFromTeam, Team, TeamActivated, TeamCreated,
    TeamDeactivated, TeamEvent,
};
