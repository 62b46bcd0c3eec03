use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::RwLock;

use teammate_events::{Event, EventEnvelope};

use super::r#trait::{EventStore, EventStoreError};

/// In-memory append-only event store.
///
/// One coarse lock guards the whole map; every check-then-write happens under a
/// single write guard. Intended for tests/dev. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryEventStore<K, E> {
    streams: RwLock<HashMap<K, Vec<EventEnvelope<E>>>>,
}

impl<K, E> InMemoryEventStore<K, E> {
    pub fn new() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
        }
    }

    fn envelopes(first_sequence: u64, events: Vec<E>) -> Vec<EventEnvelope<E>>
    where
        E: Event,
    {
        events
            .into_iter()
            .zip(first_sequence..)
            .map(|(event, sequence)| EventEnvelope::record(sequence, event))
            .collect()
    }
}

impl<K, E> Default for InMemoryEventStore<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> EventStore<K, E> for InMemoryEventStore<K, E>
where
    K: Clone + Eq + Hash + Debug + Send + Sync,
    E: Event,
{
    fn create_stream(
        &self,
        key: K,
        events: Vec<E>,
    ) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        let mut streams = self
            .streams
            .write()
            .map_err(|_| EventStoreError::Poisoned)?;

        if streams.contains_key(&key) {
            return Err(EventStoreError::StreamExists(format!("{key:?}")));
        }

        let committed = Self::envelopes(1, events);
        streams.insert(key, committed.clone());
        Ok(committed)
    }

    fn append(&self, key: &K, events: Vec<E>) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        let mut streams = self
            .streams
            .write()
            .map_err(|_| EventStoreError::Poisoned)?;

        let stream = streams
            .get_mut(key)
            .ok_or_else(|| EventStoreError::StreamNotFound(format!("{key:?}")))?;

        if events.is_empty() {
            return Err(EventStoreError::EmptyAppend(format!("{key:?}")));
        }

        let next = stream.len() as u64 + 1;
        let committed = Self::envelopes(next, events);
        stream.extend(committed.iter().cloned());
        Ok(committed)
    }

    fn load_stream(&self, key: &K) -> Result<Option<Vec<EventEnvelope<E>>>, EventStoreError> {
        let streams = self
            .streams
            .read()
            .map_err(|_| EventStoreError::Poisoned)?;

        Ok(streams.get(key).cloned())
    }
}
