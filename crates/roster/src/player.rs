use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use teammate_core::{
    AggregateRoot, DomainError, DomainResult, EventSourced, History, PlayerId, TeamId,
};
use teammate_events::Event;

use crate::summary::{PlayerSummary, TeamSummary};
use crate::team::Team;

/// Aggregate root: Player.
///
/// # Invariants
/// - Identity and name are fixed by `PlayerCreated`.
/// - A team appears at most once in `teams` (keyed by team id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    activated: bool,
    teams: BTreeMap<TeamId, TeamSummary>,
    history: History<PlayerEvent>,
}

impl Player {
    /// Factory: a new, active player with one uncommitted `PlayerCreated` event.
    pub fn create(id: PlayerId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::invalid_input("player name cannot be empty"));
        }

        let mut player = Self::empty();
        player.register(PlayerEvent::PlayerCreated(PlayerCreated { id, name }));
        Ok(player)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Teams this player is assigned to, ordered by team id.
    pub fn teams(&self) -> Vec<TeamSummary> {
        self.teams.values().cloned().collect()
    }

    pub fn is_assigned_to(&self, team_id: &TeamId) -> bool {
        self.teams.contains_key(team_id)
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.activated {
            return Err(DomainError::AlreadyActivated("player"));
        }

        self.register(PlayerEvent::PlayerActivated(PlayerActivated { id: self.id }));
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.activated {
            return Err(DomainError::AlreadyDeactivated("player"));
        }

        self.register(PlayerEvent::PlayerDeactivated(PlayerDeactivated { id: self.id }));
        Ok(())
    }

    /// Record that this player now plays for `team`.
    pub fn assign_team(&mut self, team: &Team) -> DomainResult<()> {
        let team_id = *team.id();
        if self.is_assigned_to(&team_id) {
            return Err(DomainError::already_assigned(format!(
                "team {team_id} already assigned to player {}",
                self.id
            )));
        }

        self.register(PlayerEvent::TeamAssignedToPlayer(TeamAssignedToPlayer {
            id: self.id,
            team_id,
            team_name: team.name().to_string(),
        }));
        Ok(())
    }

    pub fn unassign_team(&mut self, team: &Team) -> DomainResult<()> {
        let team_id = *team.id();
        if !self.is_assigned_to(&team_id) {
            return Err(DomainError::not_assigned(format!(
                "team {team_id} not assigned to player {}",
                self.id
            )));
        }

        self.register(PlayerEvent::TeamUnassignedFromPlayer(TeamUnassignedFromPlayer {
            id: self.id,
            team_id,
            team_name: team.name().to_string(),
        }));
        Ok(())
    }
}

impl AggregateRoot for Player {
    type Id = PlayerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.history.version()
    }
}

/// Event: PlayerCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCreated {
    pub id: PlayerId,
    pub name: String,
}

/// Event: PlayerActivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActivated {
    pub id: PlayerId,
}

/// Event: PlayerDeactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDeactivated {
    pub id: PlayerId,
}

/// Event: TeamAssignedToPlayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignedToPlayer {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub team_name: String,
}

/// Event: TeamUnassignedFromPlayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUnassignedFromPlayer {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    PlayerCreated(PlayerCreated),
    PlayerActivated(PlayerActivated),
    PlayerDeactivated(PlayerDeactivated),
    TeamAssignedToPlayer(TeamAssignedToPlayer),
    TeamUnassignedFromPlayer(TeamUnassignedFromPlayer),
}

impl Event for PlayerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PlayerEvent::PlayerCreated(_) => "roster.player.created",
            PlayerEvent::PlayerActivated(_) => "roster.player.activated",
            PlayerEvent::PlayerDeactivated(_) => "roster.player.deactivated",
            PlayerEvent::TeamAssignedToPlayer(_) => "roster.player.team_assigned",
            PlayerEvent::TeamUnassignedFromPlayer(_) => "roster.player.team_unassigned",
        }
    }
}

impl EventSourced for Player {
    type Event = PlayerEvent;
    type StreamKey = PlayerId;

    const AGGREGATE_TYPE: &'static str = "roster.player";

    fn empty() -> Self {
        Self {
            id: PlayerId::nil(),
            name: String::new(),
            activated: false,
            teams: BTreeMap::new(),
            history: History::default(),
        }
    }

    fn stream_key(&self) -> PlayerId {
        self.id
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            PlayerEvent::PlayerCreated(e) => {
                self.id = e.id;
                self.name = e.name.clone();
                self.activated = true;
                self.teams.clear();
            }
            PlayerEvent::PlayerActivated(_) => {
                self.activated = true;
            }
            PlayerEvent::PlayerDeactivated(_) => {
                self.activated = false;
            }
            PlayerEvent::TeamAssignedToPlayer(e) => {
                self.teams.insert(
                    e.team_id,
                    TeamSummary {
                        id: e.team_id,
                        name: e.team_name.clone(),
                    },
                );
            }
            PlayerEvent::TeamUnassignedFromPlayer(e) => {
                self.teams.remove(&e.team_id);
            }
        }
    }

    fn history(&self) -> &History<PlayerEvent> {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History<PlayerEvent> {
        &mut self.history
    }
}
