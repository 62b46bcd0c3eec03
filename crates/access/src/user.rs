//! User aggregate for account management (event-sourced).

use serde::{Deserialize, Serialize};

use teammate_core::{AggregateRoot, DomainError, DomainResult, EventSourced, History, UserId};
use teammate_events::Event;

// ─────────────────────────────────────────────────────────────────────────────
// User Aggregate
// ─────────────────────────────────────────────────────────────────────────────

/// User aggregate.
///
/// # Invariants
/// - Name and email are both non-empty at registration.
/// - The stream key is the email the user registered with; it is fixed by
///   `UserRegistered` and does not follow later email changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    registered_email: String,
    activated: bool,
    history: History<UserEvent>,
}

impl User {
    /// Factory: a new, active user with one uncommitted `UserRegistered` event.
    pub fn create(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::invalid_input(
                "user name and email must be provided",
            ));
        }

        let mut user = Self::empty();
        user.register(UserEvent::UserRegistered(UserRegistered { id, name, email }));
        Ok(user)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn registered_email(&self) -> &str {
        &self.registered_email
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if self.name == name {
            return Err(DomainError::no_change(format!("user name is already '{name}'")));
        }

        self.register(UserEvent::UserNameChanged(UserNameChanged { id: self.id, name }));
        Ok(())
    }

    pub fn update_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = email.into();
        if self.email == email {
            return Err(DomainError::no_change(format!("user email is already '{email}'")));
        }

        self.register(UserEvent::UserEmailChanged(UserEmailChanged { id: self.id, email }));
        Ok(())
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.activated {
            return Err(DomainError::AlreadyActivated("user"));
        }

        self.register(UserEvent::UserActivated(UserActivated { id: self.id }));
        Ok(())
    }

    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.activated {
            return Err(DomainError::AlreadyDeactivated("user"));
        }

        self.register(UserEvent::UserDeactivated(UserDeactivated { id: self.id }));
        Ok(())
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.history.version()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Event emitted when a user registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistered {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Event emitted when a user changes their name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNameChanged {
    pub id: UserId,
    pub name: String,
}

/// Event emitted when a user changes their email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEmailChanged {
    pub id: UserId,
    pub email: String,
}

/// Event emitted when a user is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivated {
    pub id: UserId,
}

/// Event emitted when a user is deactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeactivated {
    pub id: UserId,
}

/// All user events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserEvent {
    UserRegistered(UserRegistered),
    UserNameChanged(UserNameChanged),
    UserEmailChanged(UserEmailChanged),
    UserActivated(UserActivated),
    UserDeactivated(UserDeactivated),
}

impl Event for UserEvent {
    fn event_type(&self) -> &'static str {
        match self {
            UserEvent::UserRegistered(_) => "access.user.registered",
            UserEvent::UserNameChanged(_) => "access.user.name_changed",
            UserEvent::UserEmailChanged(_) => "access.user.email_changed",
            UserEvent::UserActivated(_) => "access.user.activated",
            UserEvent::UserDeactivated(_) => "access.user.deactivated",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event application
// ─────────────────────────────────────────────────────────────────────────────

impl EventSourced for User {
    type Event = UserEvent;
    type StreamKey = String;

    const AGGREGATE_TYPE: &'static str = "access.user";

    fn empty() -> Self {
        Self {
            id: UserId::nil(),
            name: String::new(),
            email: String::new(),
            registered_email: String::new(),
            activated: false,
            history: History::default(),
        }
    }

    fn stream_key(&self) -> String {
        self.registered_email.clone()
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            UserEvent::UserRegistered(e) => {
                self.id = e.id;
                self.name = e.name.clone();
                self.email = e.email.clone();
                self.registered_email = e.email.clone();
                self.activated = true;
            }
            UserEvent::UserNameChanged(e) => {
                self.name = e.name.clone();
            }
            UserEvent::UserEmailChanged(e) => {
                self.email = e.email.clone();
            }
            UserEvent::UserActivated(_) => {
                self.activated = true;
            }
            UserEvent::UserDeactivated(_) => {
                self.activated = false;
            }
        }
    }

    fn history(&self) -> &History<UserEvent> {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History<UserEvent> {
        &mut self.history
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id() -> UserId {
        "f55e93f8-c952-11ed-afa1-0242ac120002".parse().unwrap()
    }

    fn registered() -> UserEvent {
        UserEvent::UserRegistered(UserRegistered {
            id: user_id(),
            name: "Logan".to_string(),
            email: "logan@example.com".to_string(),
        })
    }

    fn deactivated() -> UserEvent {
        UserEvent::UserDeactivated(UserDeactivated { id: user_id() })
    }

    #[test]
    fn create_requires_name_and_email() {
        let cases = [("", "logan@example.com"), ("Logan", ""), ("", "")];

        for (name, email) in cases {
            let err = User::create(user_id(), name, email).unwrap_err();
            match err {
                DomainError::InvalidInput(_) => {}
                other => panic!("Expected InvalidInput for ({name:?}, {email:?}), got {other:?}"),
            }
        }
    }

    #[test]
    fn create_accepts_whitespace_only_fields() {
        let user = User::create(user_id(), " ", "  ").unwrap();

        assert_eq!(user.name(), " ");
        assert_eq!(user.registered_email(), "  ");
    }

    #[test]
    fn create_emits_single_event() {
        let user = User::create(user_id(), "Logan", "logan@example.com").unwrap();

        assert!(user.is_activated());
        assert_eq!(user.version(), 0);
        assert_eq!(user.events(), &[registered()]);
        assert_eq!(user.stream_key(), "logan@example.com");
    }

    #[test]
    fn update_name_rejects_same_value() {
        let mut user = User::from_events(&[registered()]);

        let err = user.update_name("Logan").unwrap_err();
        match err {
            DomainError::NoChange(_) => {}
            other => panic!("Expected NoChange, got {other:?}"),
        }
        assert!(user.events().is_empty());
    }

    #[test]
    fn update_name_emits_name_changed() {
        let mut user = User::from_events(&[registered()]);

        user.update_name("Matt").unwrap();

        assert_eq!(user.name(), "Matt");
        assert_eq!(
            user.events(),
            &[UserEvent::UserNameChanged(UserNameChanged {
                id: user_id(),
                name: "Matt".to_string()
            })]
        );
    }

    #[test]
    fn update_email_keeps_registration_key() {
        let mut user = User::from_events(&[registered()]);

        assert!(matches!(
            user.update_email("logan@example.com"),
            Err(DomainError::NoChange(_))
        ));
        user.update_email("new@example.com").unwrap();

        assert_eq!(user.email(), "new@example.com");
        assert_eq!(user.registered_email(), "logan@example.com");
        assert_eq!(user.stream_key(), "logan@example.com");
    }

    #[test]
    fn activation_is_a_strict_toggle() {
        let mut user = User::from_events(&[registered(), deactivated()]);
        assert!(!user.is_activated());

        assert_eq!(
            user.deactivate().unwrap_err(),
            DomainError::AlreadyDeactivated("user")
        );
        user.activate().unwrap();
        assert_eq!(
            user.activate().unwrap_err(),
            DomainError::AlreadyActivated("user")
        );
        assert!(user.is_activated());
        assert_eq!(user.events().len(), 1);
        assert_eq!(user.version(), 2);
    }

    #[test]
    fn replay_is_idempotent() {
        let mut user = User::create(user_id(), "Logan", "logan@example.com").unwrap();
        user.update_name("Matt").unwrap();
        user.deactivate().unwrap();

        let first = User::from_events(user.events());
        let second = User::from_events(user.events());

        assert_eq!(first, second);
        assert_eq!(first.name(), "Matt");
        assert!(!first.is_activated());
        assert_eq!(first.version(), 3);
    }

    #[test]
    fn replay_without_registration_does_not_panic() {
        let user = User::from_events(&[deactivated()]);

        assert!(user.id().is_nil());
        assert!(!user.is_activated());
        assert_eq!(user.version(), 1);
    }
}
