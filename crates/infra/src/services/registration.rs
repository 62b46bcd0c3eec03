//! Registration service: user sign-up and account maintenance.
//!
//! Users are stored under the email they registered with, so two
//! registrations with the same email collide in the repository and the second
//! one fails with `AlreadyExists`. Changing a user's email later does not move
//! the stream.

use std::sync::Arc;

use teammate_access::User;
use teammate_core::{DomainResult, UserId};

use crate::config::{RepositoryBackend, ServiceConfig};
use crate::repository::{InMemoryUserRepository, UserRepository};

use super::ServiceError;

pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
}

#[derive(Default)]
pub struct RegistrationServiceBuilder {
    users: Option<Arc<dyn UserRepository>>,
}

impl RegistrationServiceBuilder {
    pub fn with_user_repository(mut self, users: Arc<dyn UserRepository>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_in_memory_repositories(self) -> Self {
        self.with_user_repository(Arc::new(InMemoryUserRepository::default()))
    }

    pub fn with_backend(self, backend: RepositoryBackend) -> Self {
        match backend {
            RepositoryBackend::InMemory => self.with_in_memory_repositories(),
        }
    }

    pub fn build(self) -> Result<RegistrationService, ServiceError> {
        let users = self.users.ok_or_else(|| {
            ServiceError::InvalidConfiguration(
                "registration service needs a user repository".into(),
            )
        })?;

        Ok(RegistrationService { users })
    }
}

impl RegistrationService {
    pub fn builder() -> RegistrationServiceBuilder {
        RegistrationServiceBuilder::default()
    }

    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::default()),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::builder().with_backend(config.backend).build()
    }

    /// Register a user; the email becomes the account's permanent key.
    pub fn register_user(&self, name: &str, email: &str) -> Result<UserId, ServiceError> {
        let id = UserId::new();
        let user = User::create(id, name, email)?;

        if let Err(err) = self.users.add(&user) {
            tracing::warn!(user_id = %id, error = %err, "user registration rejected");
            return Err(err.into());
        }

        tracing::info!(user_id = %id, "user registered");
        Ok(id)
    }

    pub fn user(&self, registered_email: &str) -> Result<User, ServiceError> {
        Ok(self.users.get(&registered_email.to_owned())?)
    }

    pub fn activate_user(&self, registered_email: &str) -> Result<(), ServiceError> {
        self.change_user(registered_email, User::activate)
    }

    pub fn deactivate_user(&self, registered_email: &str) -> Result<(), ServiceError> {
        self.change_user(registered_email, User::deactivate)
    }

    pub fn change_user_name(
        &self,
        registered_email: &str,
        name: &str,
    ) -> Result<(), ServiceError> {
        self.change_user(registered_email, |user| user.update_name(name))
    }

    /// Update the contact email. The account stays keyed by `registered_email`.
    pub fn change_user_email(
        &self,
        registered_email: &str,
        email: &str,
    ) -> Result<(), ServiceError> {
        self.change_user(registered_email, |user| user.update_email(email))
    }

    fn change_user(
        &self,
        registered_email: &str,
        change: impl FnOnce(&mut User) -> DomainResult<()>,
    ) -> Result<(), ServiceError> {
        let mut user = self.users.get(&registered_email.to_owned())?;
        change(&mut user)?;
        self.users.update(&user)?;
        Ok(())
    }
}
