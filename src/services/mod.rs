//! Service layer - Application use cases
//!
//! One service per logical component: lookup, translation, auth, history.
//! Services are exposed as traits so handlers and tests can inject
//! alternative implementations.

mod auth_service;
mod container;
mod history_service;
mod lookup_service;
mod translation_service;

pub use auth_service::{AuthService, Authenticator, Claims};
pub use container::Services;
pub use history_service::{HistoryKeeper, HistoryService};
pub use lookup_service::{ConceptSearcher, LookupService};
pub use translation_service::{TranslationService, Translator};

#[cfg(test)]
pub use auth_service::MockAuthService;
#[cfg(test)]
pub use history_service::MockHistoryService;
