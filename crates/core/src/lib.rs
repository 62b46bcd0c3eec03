//! `teammate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the domain error model and the event-sourced aggregate contract.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::{AggregateRoot, EventSourced, History};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{PlayerId, TeamId, UserId};
