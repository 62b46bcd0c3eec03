//! `teammate-access` — user accounts (event-sourced).
//!
//! This crate is intentionally decoupled from storage; it only decides which
//! events a user operation produces.

pub mod user;

pub use user::{
    User, UserActivated, UserDeactivated, UserEmailChanged, UserEvent, UserNameChanged,
    UserRegistered,
};
