//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod history_repository;
mod user_repository;

pub use history_repository::{HistoryRepository, HistoryStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for unit tests
#[cfg(test)]
pub use history_repository::MockHistoryRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
