//! Application composition roots.
//!
//! Each application owns its services behind `Arc`s so handles can be cloned
//! into threads or request handlers that share the same repositories.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::services::{RegistrationService, RosterService, ServiceError};

/// Players, teams and roster assignment.
#[derive(Clone)]
pub struct TeamApplication {
    roster: Arc<RosterService>,
}

impl TeamApplication {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let roster = Arc::new(RosterService::from_config(config)?);
        tracing::info!(backend = ?config.backend, "team application configured");
        Ok(Self { roster })
    }

    pub fn roster_service(&self) -> Arc<RosterService> {
        self.roster.clone()
    }
}

/// User registration and account maintenance.
#[derive(Clone)]
pub struct AccessApplication {
    registration: Arc<RegistrationService>,
}

impl AccessApplication {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let registration = Arc::new(RegistrationService::from_config(config)?);
        tracing::info!(backend = ?config.backend, "access application configured");
        Ok(Self { registration })
    }

    pub fn registration_service(&self) -> Arc<RegistrationService> {
        self.registration.clone()
    }
}
