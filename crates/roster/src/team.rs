use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use teammate_core::{
    AggregateRoot, DomainError, DomainResult, EventSourced, History, PlayerId, TeamId,
};
use teammate_events::Event;

use crate::player::Player;
use crate::summary::{PlayerSummary, TeamSummary};

/// Aggregate root: Team.
///
/// # Invariants
/// - Identity and name are fixed by `TeamCreated`.
/// - A player appears at most once on the roster (keyed by player id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    activated: bool,
    players: BTreeMap<PlayerId, PlayerSummary>,
    history: History<TeamEvent>,
}

impl Team {
    /// Factory: a new, active team with one uncommitted `TeamCreated` event.
    pub fn create(id: TeamId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::invalid_input("team name cannot be empty"));
        }

        let mut team = Self::empty();
        team.register(TeamEvent::TeamCreated(TeamCreated { id, name }));
        Ok(team)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Roster, ordered by player id.
    pub fn players(&self) -> Vec<PlayerSummary> {
        self.players.values().cloned().collect()
    }

    pub fn has_player(&self, player_id: &PlayerId) -> bool {
        self.players.contains_key(player_id)
    }

    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.activated {
            return Err(DomainError::AlreadyActivated("team"));
        }

        self.register(TeamEvent::TeamActivated(TeamActivated { id: self.id }));
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.activated {
            return Err(DomainError::AlreadyDeactivated("team"));
        }

        self.register(TeamEvent::TeamDeactivated(TeamDeactivated { id: self.id }));
        Ok(())
    }

    /// Put `player` on this team's roster.
    pub fn assign_player(&mut self, player: &Player) -> DomainResult<()> {
        let player_id = *player.id();
        if self.has_player(&player_id) {
            return Err(DomainError::already_assigned(format!(
                "player {player_id} already assigned to team {}",
                self.id
            )));
        }

        self.register(TeamEvent::PlayerAssignedToTeam(PlayerAssignedToTeam {
            id: self.id,
            player_id,
            player_name: player.name().to_string(),
        }));
        Ok(())
    }

    pub fn unassign_player(&mut self, player: &Player) -> DomainResult<()> {
        let player_id = *player.id();
        if !self.has_player(&player_id) {
            return Err(DomainError::not_assigned(format!(
                "player {player_id} not assigned to team {}",
                self.id
            )));
        }

        self.register(TeamEvent::PlayerUnassignedFromTeam(PlayerUnassignedFromTeam {
            id: self.id,
            player_id,
            player_name: player.name().to_string(),
        }));
        Ok(())
    }
}

impl AggregateRoot for Team {
    type Id = TeamId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.history.version()
    }
}

/// Event: TeamCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCreated {
    pub id: TeamId,
    pub name: String,
}

/// Event: TeamActivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamActivated {
    pub id: TeamId,
}

/// Event: TeamDeactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDeactivated {
    pub id: TeamId,
}

/// Event: PlayerAssignedToTeam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAssignedToTeam {
    pub id: TeamId,
    pub player_id: PlayerId,
    pub player_name: String,
}

/// Event: PlayerUnassignedFromTeam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUnassignedFromTeam {
    pub id: TeamId,
    pub player_id: PlayerId,
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamEvent {
    TeamCreated(TeamCreated),
    TeamActivated(TeamActivated),
    TeamDeactivated(TeamDeactivated),
    PlayerAssignedToTeam(PlayerAssignedToTeam),
    PlayerUnassignedFromTeam(PlayerUnassignedFromTeam),
}

impl Event for TeamEvent {
    fn event_type(&self) -> &'static str {
        match self {
            TeamEvent::TeamCreated(_) => "roster.team.created",
            TeamEvent::TeamActivated(_) => "roster.team.activated",
            TeamEvent::TeamDeactivated(_) => "roster.team.deactivated",
            TeamEvent::PlayerAssignedToTeam(_) => "roster.team.player_assigned",
            TeamEvent::PlayerUnassignedFromTeam(_) => "roster.team.player_unassigned",
        }
    }
}

impl EventSourced for Team {
    type Event = TeamEvent;
    type StreamKey = TeamId;

    const AGGREGATE_TYPE: &'static str = "roster.team";

    fn empty() -> Self {
        Self {
            id: TeamId::nil(),
            name: String::new(),
            activated: false,
            players: BTreeMap::new(),
            history: History::default(),
        }
    }

    fn stream_key(&self) -> TeamId {
        self.id
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            TeamEvent::TeamCreated(e) => {
                self.id = e.id;
                self.name = e.name.clone();
                self.activated = true;
                self.players.clear();
            }
            TeamEvent::TeamActivated(_) => {
                self.activated = true;
            }
            TeamEvent::TeamDeactivated(_) => {
                self.activated = false;
            }
            TeamEvent::PlayerAssignedToTeam(e) => {
                self.players.insert(
                    e.player_id,
                    PlayerSummary {
                        id: e.player_id,
                        name: e.player_name.clone(),
                    },
                );
            }
            TeamEvent::PlayerUnassignedFromTeam(e) => {
                self.players.remove(&e.player_id);
            }
        }
    }

    fn history(&self) -> &History<TeamEvent> {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History<TeamEvent> {
        &mut self.history
    }
}
