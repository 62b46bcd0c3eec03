//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Roster entries (the player a team knows about, the team a player knows
/// about) are entities: two summaries with the same id describe the same
/// counterpart even if the display name recorded with them differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Human-readable name recorded for the entity.
    fn name(&self) -> &str;
}
