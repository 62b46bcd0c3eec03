use serde::{Deserialize, Serialize};

use teammate_core::{Entity, PlayerId, TeamId};

/// A player as recorded on a team's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
}

/// A team as recorded on a player's list of teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
}

impl Entity for PlayerSummary {
    type Id = PlayerId;

    fn id(&self) -> &PlayerId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for TeamSummary {
    type Id = TeamId;

    fn id(&self) -> &TeamId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
