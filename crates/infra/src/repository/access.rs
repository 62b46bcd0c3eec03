use teammate_access::User;

use super::{InMemoryRepository, Repository};

/// User repository, keyed by the email a user registered with.
pub trait UserRepository: Repository<User> {}

impl<R: Repository<User>> UserRepository for R {}

pub type InMemoryUserRepository = InMemoryRepository<User>;
