//! Aggregate root traits for event-sourced domain models.

/// Aggregate root marker + minimal interface.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Number of events folded into this instance when it was loaded.
    ///
    /// Events emitted in the current session are *not* counted; they are
    /// only reflected here once persisted and replayed on a later load.
    fn version(&self) -> u64;
}

/// Bookkeeping shared by every event-sourced aggregate: how deep the replayed
/// history was, and which events were emitted since then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<E> {
    version: u64,
    changes: Vec<E>,
}

impl<E> Default for History<E> {
    fn default() -> Self {
        Self {
            version: 0,
            changes: Vec::new(),
        }
    }
}

impl<E> History<E> {
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Uncommitted events, in emission order.
    pub fn changes(&self) -> &[E] {
        &self.changes
    }

    fn replayed(&mut self) {
        self.version += 1;
    }

    fn record(&mut self, event: E) {
        self.changes.push(event);
    }
}

/// Event-sourced aggregate semantics.
///
/// - **State mutation**: `apply(&mut self, event)` evolves state and nothing else.
///   It must stay deterministic and must not validate: history is trusted.
/// - **Decision logic** lives in the aggregate's own intention-revealing methods,
///   which check a precondition and then funnel the resulting event through
///   [`EventSourced::register`].
///
/// Aggregates must not perform IO or side effects.
pub trait EventSourced: AggregateRoot + Sized {
    type Event: Clone + core::fmt::Debug;

    /// Stable aggregate type name (e.g. "roster.team").
    const AGGREGATE_TYPE: &'static str;

    /// Key under which the aggregate's log is stored.
    type StreamKey: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Zero value: a not-yet-created instance, the starting point of a replay.
    fn empty() -> Self;

    fn stream_key(&self) -> Self::StreamKey;

    /// Evolve in-memory state from a single event.
    fn apply(&mut self, event: &Self::Event);

    fn history(&self) -> &History<Self::Event>;

    fn history_mut(&mut self) -> &mut History<Self::Event>;

    /// Rebuild an aggregate by folding `events` in order onto the zero value.
    fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        let mut aggregate = Self::empty();
        aggregate.replay(events);
        aggregate
    }

    /// Fold already-persisted events onto the current state, counting each
    /// one towards `version()`.
    fn replay<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        for event in events {
            self.apply(event);
            self.history_mut().replayed();
        }
    }

    /// Record a freshly emitted event as uncommitted and apply it immediately,
    /// so later calls in the same session observe its effect.
    fn register(&mut self, event: Self::Event) {
        self.history_mut().record(event.clone());
        self.apply(&event);
    }

    /// Uncommitted events since load. Reading does not clear them.
    fn events(&self) -> &[Self::Event] {
        self.history().changes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum LampEvent {
        Installed(u32),
        SwitchedOn,
        SwitchedOff,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Lamp {
        id: u32,
        on: bool,
        history: History<LampEvent>,
    }

    impl AggregateRoot for Lamp {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn version(&self) -> u64 {
            self.history.version()
        }
    }

    impl EventSourced for Lamp {
        type Event = LampEvent;
        type StreamKey = u32;

        const AGGREGATE_TYPE: &'static str = "test.lamp";

        fn empty() -> Self {
            Self {
                id: 0,
                on: false,
                history: History::default(),
            }
        }

        fn stream_key(&self) -> u32 {
            self.id
        }

        fn apply(&mut self, event: &LampEvent) {
            match event {
                LampEvent::Installed(id) => {
                    self.id = *id;
                    self.on = true;
                }
                LampEvent::SwitchedOn => self.on = true,
                LampEvent::SwitchedOff => self.on = false,
            }
        }

        fn history(&self) -> &History<LampEvent> {
            &self.history
        }

        fn history_mut(&mut self) -> &mut History<LampEvent> {
            &mut self.history
        }
    }

    fn lamp_event() -> impl Strategy<Value = LampEvent> {
        prop_oneof![
            (1u32..100).prop_map(LampEvent::Installed),
            Just(LampEvent::SwitchedOn),
            Just(LampEvent::SwitchedOff),
        ]
    }

    #[test]
    fn register_applies_without_counting_version() {
        let mut lamp = Lamp::empty();
        lamp.register(LampEvent::Installed(7));
        lamp.register(LampEvent::SwitchedOff);

        assert_eq!(lamp.id(), &7);
        assert!(!lamp.on);
        assert_eq!(lamp.version(), 0);
        assert_eq!(
            lamp.events(),
            &[LampEvent::Installed(7), LampEvent::SwitchedOff]
        );
    }

    #[test]
    fn replay_counts_each_event_and_leaves_no_changes() {
        let lamp = Lamp::from_events(&[LampEvent::Installed(3), LampEvent::SwitchedOff]);

        assert_eq!(lamp.version(), 2);
        assert!(lamp.events().is_empty());
        assert!(!lamp.on);
    }

    #[test]
    fn reading_events_does_not_clear_them() {
        let mut lamp = Lamp::empty();
        lamp.register(LampEvent::Installed(1));

        assert_eq!(lamp.events().len(), 1);
        assert_eq!(lamp.events().len(), 1);
    }

    #[test]
    fn replay_tolerates_out_of_order_history() {
        let lamp = Lamp::from_events(&[LampEvent::SwitchedOff, LampEvent::SwitchedOn]);

        assert_eq!(lamp.id(), &0);
        assert!(lamp.on);
        assert_eq!(lamp.version(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: replaying the same log twice yields identical state.
        #[test]
        fn replay_is_deterministic(events in prop::collection::vec(lamp_event(), 0..32)) {
            let first = Lamp::from_events(&events);
            let second = Lamp::from_events(&events);
            prop_assert_eq!(first.version(), events.len() as u64);
            prop_assert_eq!(first, second);
        }

        /// Property: replaying a log in two passes equals replaying it in one.
        #[test]
        fn replay_in_two_passes_equals_one(
            events in prop::collection::vec(lamp_event(), 0..32),
            split in 0usize..32,
        ) {
            let split = split.min(events.len());
            let (head, tail) = events.split_at(split);

            let mut staged = Lamp::from_events(head);
            staged.replay(tail);

            prop_assert_eq!(staged, Lamp::from_events(&events));
        }
    }
}
