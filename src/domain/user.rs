//! ABHA user entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An ABHA account holder.
///
/// Seeded once from CSV when the user store is empty; never mutated by this
/// service afterwards. `abha_id` and `email` are unique. All fields are kept
/// as strings, mirroring the seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AbhaUser {
    /// Unique ABHA identifier
    #[schema(example = "ABHA123")]
    pub abha_id: String,
    #[schema(example = "Asha Kumari")]
    pub name: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    #[schema(example = "9999999999")]
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub address: String,
    pub created_at: String,
}
