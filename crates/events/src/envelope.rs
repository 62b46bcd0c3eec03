use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Event;

/// Envelope for an event, containing stream metadata.
///
/// This is the unit an event store appends to a stream.
///
/// Notes:
/// - **Append-only**: `sequence_number` is 1-based and increases by one per
///   event within a stream.
/// - `recorded_at` is the time the store accepted the event, not business time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    event_type: String,

    /// Monotonically increasing position in the aggregate stream.
    sequence_number: u64,
    recorded_at: DateTime<Utc>,

    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload` for position `sequence_number`, stamping it now.
    pub fn record(sequence_number: u64, payload: E) -> Self {
        Self::new(Uuid::now_v7(), sequence_number, Utc::now(), payload)
    }

    pub fn new(
        event_id: Uuid,
        sequence_number: u64,
        recorded_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            event_type: payload.event_type().to_string(),
            sequence_number,
            recorded_at,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Whistled {
        pitch: u8,
    }

    impl Event for Whistled {
        fn event_type(&self) -> &'static str {
            "test.whistled"
        }
    }

    #[test]
    fn record_captures_type_and_position() {
        let envelope = EventEnvelope::record(3, Whistled { pitch: 9 });

        assert_eq!(envelope.event_type(), "test.whistled");
        assert_eq!(envelope.sequence_number(), 3);
        assert_eq!(envelope.payload(), &Whistled { pitch: 9 });
        assert_eq!(envelope.into_payload().pitch, 9);
    }

    #[test]
    fn serializes_with_metadata() {
        let envelope = EventEnvelope::record(1, Whistled { pitch: 2 });
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["event_type"], "test.whistled");
        assert_eq!(value["sequence_number"], 1);
        assert_eq!(value["payload"]["pitch"], 2);
    }
}
