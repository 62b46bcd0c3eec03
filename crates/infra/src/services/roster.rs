//! Roster service: players, teams and the assignment between them.
//!
//! ## Two-sided assignment
//!
//! The relationship lives in both logs: the team records the player and the
//! player records the team. Assigning therefore mutates two aggregates and
//! issues two independent writes:
//!
//! ```text
//! teams.get ─► players.get ─► team.assign_player ─► player.assign_team
//!                                                        │
//!                         teams.update ◄─────────────────┘
//!                              │
//!                         players.update
//! ```
//!
//! Both mutators must succeed before anything is written. The writes
//! themselves are not atomic: if `players.update` fails after `teams.update`
//! succeeded, the team lists the player but the player does not list the team.
//! That state is logged and the error is returned; nothing compensates for it.

use std::sync::Arc;

use teammate_core::{AggregateRoot, DomainResult, PlayerId, TeamId};
use teammate_roster::{Player, PlayerSummary, Team, TeamSummary};

use crate::config::{RepositoryBackend, ServiceConfig};
use crate::repository::{
    InMemoryPlayerRepository, InMemoryTeamRepository, PlayerRepository, TeamRepository,
};

use super::ServiceError;

pub struct RosterService {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
}

/// Explicit wiring for [`RosterService`]; both repositories are required.
#[derive(Default)]
pub struct RosterServiceBuilder {
    players: Option<Arc<dyn PlayerRepository>>,
    teams: Option<Arc<dyn TeamRepository>>,
}

impl RosterServiceBuilder {
    pub fn with_player_repository(mut self, players: Arc<dyn PlayerRepository>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn with_team_repository(mut self, teams: Arc<dyn TeamRepository>) -> Self {
        self.teams = Some(teams);
        self
    }

    pub fn with_in_memory_repositories(self) -> Self {
        self.with_player_repository(Arc::new(InMemoryPlayerRepository::default()))
            .with_team_repository(Arc::new(InMemoryTeamRepository::default()))
    }

    pub fn with_backend(self, backend: RepositoryBackend) -> Self {
        match backend {
            RepositoryBackend::InMemory => self.with_in_memory_repositories(),
        }
    }

    pub fn build(self) -> Result<RosterService, ServiceError> {
        let players = self.players.ok_or_else(|| {
            ServiceError::InvalidConfiguration("roster service needs a player repository".into())
        })?;
        let teams = self.teams.ok_or_else(|| {
            ServiceError::InvalidConfiguration("roster service needs a team repository".into())
        })?;

        Ok(RosterService { players, teams })
    }
}

impl RosterService {
    pub fn builder() -> RosterServiceBuilder {
        RosterServiceBuilder::default()
    }

    pub fn in_memory() -> Self {
        Self {
            players: Arc::new(InMemoryPlayerRepository::default()),
            teams: Arc::new(InMemoryTeamRepository::default()),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::builder().with_backend(config.backend).build()
    }

    /// Register a new player under a fresh identifier.
    pub fn add_player(&self, name: &str) -> Result<PlayerId, ServiceError> {
        let id = PlayerId::new();
        self.add_player_with_id(id, name)?;
        Ok(id)
    }

    pub fn add_player_with_id(&self, id: PlayerId, name: &str) -> Result<(), ServiceError> {
        let player = Player::create(id, name)?;
        self.players.add(&player)?;

        tracing::info!(player_id = %id, "player added");
        Ok(())
    }

    /// Register a new team under a fresh identifier.
    pub fn add_team(&self, name: &str) -> Result<TeamId, ServiceError> {
        let id = TeamId::new();
        self.add_team_with_id(id, name)?;
        Ok(id)
    }

    pub fn add_team_with_id(&self, id: TeamId, name: &str) -> Result<(), ServiceError> {
        let team = Team::create(id, name)?;
        self.teams.add(&team)?;

        tracing::info!(team_id = %id, "team added");
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Result<Player, ServiceError> {
        Ok(self.players.get(&id)?)
    }

    pub fn team(&self, id: TeamId) -> Result<Team, ServiceError> {
        Ok(self.teams.get(&id)?)
    }

    pub fn players_of(&self, team_id: TeamId) -> Result<Vec<PlayerSummary>, ServiceError> {
        Ok(self.teams.players(&team_id)?)
    }

    pub fn teams_of(&self, player_id: PlayerId) -> Result<Vec<TeamSummary>, ServiceError> {
        Ok(self.players.teams(&player_id)?)
    }

    /// Put a player on a team's roster (and the team on the player's list).
    pub fn assign_player_to_team(
        &self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<(), ServiceError> {
        let mut team = self.teams.get(&team_id)?;
        let mut player = self.players.get(&player_id)?;

        team.assign_player(&player)?;
        player.assign_team(&team)?;

        self.persist_pair(&team, &player)?;

        tracing::info!(team_id = %team_id, player_id = %player_id, "player assigned to team");
        Ok(())
    }

    pub fn unassign_player_from_team(
        &self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<(), ServiceError> {
        let mut team = self.teams.get(&team_id)?;
        let mut player = self.players.get(&player_id)?;

        team.unassign_player(&player)?;
        player.unassign_team(&team)?;

        self.persist_pair(&team, &player)?;

        tracing::info!(team_id = %team_id, player_id = %player_id, "player unassigned from team");
        Ok(())
    }

    pub fn activate_player(&self, id: PlayerId) -> Result<(), ServiceError> {
        self.change_player(id, Player::activate)
    }

    pub fn deactivate_player(&self, id: PlayerId) -> Result<(), ServiceError> {
        self.change_player(id, Player::deactivate)
    }

    pub fn activate_team(&self, id: TeamId) -> Result<(), ServiceError> {
        self.change_team(id, Team::activate)
    }

    pub fn deactivate_team(&self, id: TeamId) -> Result<(), ServiceError> {
        self.change_team(id, Team::deactivate)
    }

    fn change_player(
        &self,
        id: PlayerId,
        change: impl FnOnce(&mut Player) -> DomainResult<()>,
    ) -> Result<(), ServiceError> {
        let mut player = self.players.get(&id)?;
        change(&mut player)?;
        self.players.update(&player)?;
        Ok(())
    }

    fn change_team(
        &self,
        id: TeamId,
        change: impl FnOnce(&mut Team) -> DomainResult<()>,
    ) -> Result<(), ServiceError> {
        let mut team = self.teams.get(&id)?;
        change(&mut team)?;
        self.teams.update(&team)?;
        Ok(())
    }

    fn persist_pair(&self, team: &Team, player: &Player) -> Result<(), ServiceError> {
        self.teams.update(team)?;

        if let Err(err) = self.players.update(player) {
            tracing::warn!(
                team_id = %team.id(),
                player_id = %player.id(),
                error = %err,
                "team updated but player update failed; relationship is one-sided"
            );
            return Err(err.into());
        }
        Ok(())
    }
}
