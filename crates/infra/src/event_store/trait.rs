use std::sync::Arc;

use thiserror::Error;

use teammate_events::EventEnvelope;

/// Event store operation error.
///
/// These are **infrastructure errors** (stream existence, lock health) as
/// opposed to domain errors (validation, invariants). Every variant is
/// detected before the store is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("stream already exists: {0}")]
    StreamExists(String),

    #[error("stream not found: {0}")]
    StreamNotFound(String),

    #[error("nothing to append to stream: {0}")]
    EmptyAppend(String),

    #[error("event store lock poisoned")]
    Poisoned,
}

/// Append-only, keyed event store.
///
/// Events are organized into **streams**, one per aggregate instance, keyed by
/// `K`. Within a stream, envelopes carry sequence numbers 1, 2, 3, ...
///
/// ## Implementation Requirements
///
/// Implementations must:
/// - perform each existence check and the write it guards as one atomic step,
///   so two concurrent `create_stream` calls for one key cannot both succeed
/// - never rewrite or truncate a stream
/// - leave the store untouched when an operation fails
pub trait EventStore<K, E>: Send + Sync {
    /// Start a new stream under `key` with `events` as its initial log.
    fn create_stream(&self, key: K, events: Vec<E>)
    -> Result<Vec<EventEnvelope<E>>, EventStoreError>;

    /// Append `events` to the existing stream under `key`.
    fn append(&self, key: &K, events: Vec<E>) -> Result<Vec<EventEnvelope<E>>, EventStoreError>;

    /// Load the full stream, or `None` if no stream exists under `key`.
    fn load_stream(&self, key: &K) -> Result<Option<Vec<EventEnvelope<E>>>, EventStoreError>;
}

impl<K, E, S> EventStore<K, E> for Arc<S>
where
    S: EventStore<K, E> + ?Sized,
{
    fn create_stream(
        &self,
        key: K,
        events: Vec<E>,
    ) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        (**self).create_stream(key, events)
    }

    fn append(&self, key: &K, events: Vec<E>) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        (**self).append(key, events)
    }

    fn load_stream(&self, key: &K) -> Result<Option<Vec<EventEnvelope<E>>>, EventStoreError> {
        (**self).load_stream(key)
    }
}
