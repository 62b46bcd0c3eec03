//! Application services orchestrating aggregates and repositories.
//!
//! Services load aggregates, invoke their mutators and persist the results.
//! They propagate the first error they meet and never retry.

mod error;
mod registration;
mod roster;

pub use error::ServiceError;
pub use registration::{RegistrationService, RegistrationServiceBuilder};
pub use roster::{RosterService, RosterServiceBuilder};
