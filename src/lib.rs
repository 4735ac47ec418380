//! NAMASTE Bridge - A terminology bridge API for traditional medicine codes
//!
//! Looks up ICD-11 TM2 concepts, translates codes bidirectionally across a
//! pre-joined NAMASTE / ICD11_TM2 / SNOMED CT / LOINC mapping table, and keeps
//! a per-user translation history behind ABHA bearer-token authentication.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities (concepts, mappings, users, history)
//! - **services**: Application use cases (lookup, translation, auth, history)
//! - **infra**: Infrastructure concerns (database, repositories, CSV datasets)
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{AbhaUser, Concept, ConceptMap, MappingRow, TranslationRecord};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Datasets};
