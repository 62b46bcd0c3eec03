//! End-to-end registration flows through `AccessApplication`.

use anyhow::Result;

use teammate_core::AggregateRoot;
use teammate_infra::{AccessApplication, RepositoryError, ServiceConfig, ServiceError};

fn app() -> Result<AccessApplication> {
    teammate_observability::init_for_tests();
    let config = ServiceConfig::from_json(r#"{"backend": "in_memory"}"#)?;
    Ok(AccessApplication::new(&config)?)
}

#[test]
fn register_update_and_deactivate_user() -> Result<()> {
    let registration = app()?.registration_service();

    let id = registration.register_user("Matt", "matt@example.com")?;
    registration.change_user_name("matt@example.com", "Matthew")?;
    registration.change_user_email("matt@example.com", "matthew@example.com")?;
    registration.deactivate_user("matt@example.com")?;

    let user = registration.user("matt@example.com")?;
    assert_eq!(user.id(), &id);
    assert_eq!(user.name(), "Matthew");
    assert_eq!(user.email(), "matthew@example.com");
    assert!(!user.is_activated());
    assert_eq!(user.version(), 4);
    Ok(())
}

#[test]
fn second_registration_with_same_email_is_rejected() -> Result<()> {
    let registration = app()?.registration_service();

    registration.register_user("Matt", "matt@example.com")?;
    let err = registration
        .register_user("Impostor", "matt@example.com")
        .unwrap_err();

    match err {
        ServiceError::Repository(RepositoryError::AlreadyExists(msg)) => {
            assert!(msg.starts_with("access.user"))
        }
        other => anyhow::bail!("expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(registration.user("matt@example.com")?.name(), "Matt");
    Ok(())
}
