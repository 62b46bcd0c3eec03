use teammate_core::{PlayerId, TeamId};
use teammate_roster::{Player, PlayerSummary, Team, TeamSummary};

use super::{InMemoryRepository, Repository, RepositoryError};

/// Player repository: the generic contract plus roster queries.
pub trait PlayerRepository: Repository<Player> {
    /// Teams the player is assigned to, as recorded in the player's own log.
    fn teams(&self, id: &PlayerId) -> Result<Vec<TeamSummary>, RepositoryError> {
        Ok(self.get(id)?.teams())
    }
}

/// Team repository: the generic contract plus roster queries.
pub trait TeamRepository: Repository<Team> {
    /// Players on the team's roster, as recorded in the team's own log.
    fn players(&self, id: &TeamId) -> Result<Vec<PlayerSummary>, RepositoryError> {
        Ok(self.get(id)?.players())
    }
}

impl<R: Repository<Player>> PlayerRepository for R {}

impl<R: Repository<Team>> TeamRepository for R {}

pub type InMemoryPlayerRepository = InMemoryRepository<Player>;

pub type InMemoryTeamRepository = InMemoryRepository<Team>;
