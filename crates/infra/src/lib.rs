//! Infrastructure layer: event stores, repositories, services and their wiring.

pub mod application;
pub mod config;
pub mod event_store;
pub mod repository;
pub mod services;

pub use application::{AccessApplication, TeamApplication};
pub use config::{RepositoryBackend, ServiceConfig};
pub use event_store::{EventStore, EventStoreError, InMemoryEventStore};
pub use repository::{
    EventSourcedRepository, InMemoryPlayerRepository, InMemoryRepository, InMemoryTeamRepository,
    InMemoryUserRepository, PlayerRepository, Repository, RepositoryError, TeamRepository,
    UserRepository,
};
pub use services::{RegistrationService, RosterService, ServiceError};
