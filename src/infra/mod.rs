//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Schema migrations
//! - Immutable CSV datasets loaded at startup

pub mod datasets;
pub mod db;
pub mod repositories;

pub use datasets::Datasets;
pub use db::{Database, Migrator};
pub use repositories::{HistoryRepository, HistoryStore, UserRepository, UserStore};
