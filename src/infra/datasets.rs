//! Immutable tabular datasets loaded from CSV at startup.
//!
//! The concept and mapping tables are read once during process start and
//! shared read-only behind an `Arc` afterwards, so concurrent request
//! handling needs no synchronization around them.

use std::fs::File;
use std::path::Path;

use crate::config::Config;
use crate::domain::{AbhaUser, Concept, MappingRow};
use crate::errors::{AppError, AppResult};

/// The two read-only tables backing lookup and translation.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// ICD-11 TM2 concept table, in file order
    pub concepts: Vec<Concept>,
    /// Pre-joined NAMASTE/ICD11/SNOMED/LOINC mapping table, in file order
    pub mappings: Vec<MappingRow>,
}

impl Datasets {
    /// Load both datasets from the paths configured via environment.
    pub fn load(config: &Config) -> AppResult<Self> {
        let concepts = read_csv(&config.concept_csv)?;
        let mappings = read_csv(&config.mapping_csv)?;

        tracing::info!(
            concepts = concepts.len(),
            mappings = mappings.len(),
            "Datasets loaded"
        );

        Ok(Self { concepts, mappings })
    }

    /// Build datasets from in-memory rows (for tests).
    pub fn from_rows(concepts: Vec<Concept>, mappings: Vec<MappingRow>) -> Self {
        Self { concepts, mappings }
    }
}

/// Load the ABHA user seed file.
pub fn load_seed_users(path: &str) -> AppResult<Vec<AbhaUser>> {
    read_csv(path)
}

/// Deserialize every row of a headed CSV file, preserving file order.
fn read_csv<T: serde::de::DeserializeOwned>(path: &str) -> AppResult<Vec<T>> {
    let file = File::open(Path::new(path))
        .map_err(|e| AppError::internal(format!("Failed to open {}: {}", path, e)))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
