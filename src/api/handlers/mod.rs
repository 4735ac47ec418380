//! HTTP request handlers.

pub mod abha_handler;
pub mod icd_handler;
pub mod mapping_handler;

pub use abha_handler::abha_routes;
pub use icd_handler::icd_routes;
pub use mapping_handler::mapping_routes;
