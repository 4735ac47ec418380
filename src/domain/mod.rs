//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod concept;
pub mod history;
pub mod mapping;
pub mod user;

pub use concept::Concept;
pub use history::{NewTranslationRecord, TranslationRecord};
pub use mapping::{ConceptMap, ConceptMapping, MappingRow, SourceSystem};
pub use user::AbhaUser;
