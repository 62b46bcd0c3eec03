//! Aggregate repositories on top of an [`EventStore`].
//!
//! A repository speaks in aggregates: `get` replays a stored log, `add` persists
//! a new aggregate's uncommitted events as its initial log, and `update` appends
//! the uncommitted events of a loaded aggregate.

mod access;
mod roster;

use std::marker::PhantomData;

use thiserror::Error;

use teammate_core::EventSourced;
use teammate_events::Event;

use crate::event_store::{EventStore, EventStoreError, InMemoryEventStore};

pub use access::{InMemoryUserRepository, UserRepository};
pub use roster::{
    InMemoryPlayerRepository, InMemoryTeamRepository, PlayerRepository, TeamRepository,
};

/// Repository operation error.
///
/// All variants are terminal for the calling operation; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} has no updates to persist")]
    NoUpdates(String),

    #[error("event store failure: {0}")]
    Store(String),
}

impl RepositoryError {
    fn from_store(aggregate_type: &str, err: EventStoreError) -> Self {
        let named = |key: String| format!("{aggregate_type} {key}");
        match err {
            EventStoreError::StreamNotFound(key) => Self::NotFound(named(key)),
            EventStoreError::StreamExists(key) => Self::AlreadyExists(named(key)),
            EventStoreError::EmptyAppend(key) => Self::NoUpdates(named(key)),
            EventStoreError::Poisoned => Self::Store(err.to_string()),
        }
    }
}

/// Get/add/update contract shared by every aggregate repository.
pub trait Repository<A: EventSourced>: Send + Sync {
    /// Load and replay the aggregate stored under `key`.
    fn get(&self, key: &A::StreamKey) -> Result<A, RepositoryError>;

    /// Persist a new aggregate; fails if its key is already taken.
    fn add(&self, aggregate: &A) -> Result<(), RepositoryError>;

    /// Append the aggregate's uncommitted events to its existing log.
    fn update(&self, aggregate: &A) -> Result<(), RepositoryError>;
}

/// Repository backed by any [`EventStore`] keyed by the aggregate's stream key.
#[derive(Debug)]
pub struct EventSourcedRepository<A, S> {
    store: S,
    _aggregate: PhantomData<fn() -> A>,
}

/// Repository over a private [`InMemoryEventStore`].
pub type InMemoryRepository<A> = EventSourcedRepository<
    A,
    InMemoryEventStore<<A as EventSourced>::StreamKey, <A as EventSourced>::Event>,
>;

impl<A, S> EventSourcedRepository<A, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _aggregate: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<A, S> Default for EventSourcedRepository<A, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<A, S> Repository<A> for EventSourcedRepository<A, S>
where
    A: EventSourced,
    A::Event: Event,
    S: EventStore<A::StreamKey, A::Event>,
{
    fn get(&self, key: &A::StreamKey) -> Result<A, RepositoryError> {
        let stream = self
            .store
            .load_stream(key)
            .map_err(|e| RepositoryError::from_store(A::AGGREGATE_TYPE, e))?
            .ok_or_else(|| RepositoryError::NotFound(format!("{} {key:?}", A::AGGREGATE_TYPE)))?;

        tracing::debug!(
            aggregate_type = A::AGGREGATE_TYPE,
            key = ?key,
            events = stream.len(),
            "replaying aggregate"
        );

        Ok(A::from_events(stream.iter().map(|e| e.payload())))
    }

    fn add(&self, aggregate: &A) -> Result<(), RepositoryError> {
        let key = aggregate.stream_key();
        let committed = self
            .store
            .create_stream(key.clone(), aggregate.events().to_vec())
            .map_err(|e| RepositoryError::from_store(A::AGGREGATE_TYPE, e))?;

        tracing::debug!(
            aggregate_type = A::AGGREGATE_TYPE,
            key = ?key,
            events = committed.len(),
            "stream created"
        );
        Ok(())
    }

    fn update(&self, aggregate: &A) -> Result<(), RepositoryError> {
        let key = aggregate.stream_key();
        let committed = self
            .store
            .append(&key, aggregate.events().to_vec())
            .map_err(|e| RepositoryError::from_store(A::AGGREGATE_TYPE, e))?;

        tracing::debug!(
            aggregate_type = A::AGGREGATE_TYPE,
            key = ?key,
            events = committed.len(),
            "events appended"
        );
        Ok(())
    }
}
