//! Service layer providing inventory business operations on top of models.
//! - Separates business logic from data access via repository traits.
//! - Each resource follows the same layout: domain, validator, repository, service, repo.
//! - A single error type (`InventoryError`) carries a closed `ErrorCode`.

pub mod errors;
pub mod sort;
pub mod category;
pub mod product;
#[cfg(test)]
pub mod test_support;

pub use common::pagination::{Page, PageRequest};
