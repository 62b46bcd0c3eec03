//! Concurrent writers against shared in-memory repositories.

use std::sync::Arc;
use std::thread;

use anyhow::Result;

use teammate_core::{AggregateRoot, PlayerId};
use teammate_infra::{InMemoryPlayerRepository, Repository, RepositoryError, RosterService};
use teammate_roster::Player;

#[test]
fn concurrent_adds_of_one_player_admit_exactly_one() -> Result<()> {
    teammate_observability::init_for_tests();
    let repo = Arc::new(InMemoryPlayerRepository::default());
    let id = PlayerId::new();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = repo.clone();
            thread::spawn(move || -> Result<(), RepositoryError> {
                let player = Player::create(id, format!("Player {i}"))
                    .map_err(|e| RepositoryError::Store(e.to_string()))?;
                repo.add(&player)
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        match handle.join() {
            Ok(Ok(())) => accepted += 1,
            Ok(Err(RepositoryError::AlreadyExists(_))) => {}
            Ok(Err(other)) => anyhow::bail!("unexpected error: {other}"),
            Err(_) => anyhow::bail!("writer thread panicked"),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(repo.get(&id)?.version(), 1);
    Ok(())
}

#[test]
fn concurrent_distinct_adds_all_land() -> Result<()> {
    teammate_observability::init_for_tests();
    let roster = Arc::new(RosterService::in_memory());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let roster = roster.clone();
            thread::spawn(move || roster.add_player(&format!("Player {i}")))
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        match handle.join() {
            Ok(result) => ids.push(result?),
            Err(_) => anyhow::bail!("writer thread panicked"),
        }
    }

    for id in ids {
        assert!(roster.player(id)?.is_activated());
    }
    Ok(())
}
