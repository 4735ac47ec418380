//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod translation_history;
pub mod user;
