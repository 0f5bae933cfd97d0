//! Product resource: domain (entity + wire shapes), validator, repository, service.

pub mod domain;
pub mod validator;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Product, ProductRequest, ProductResponse};
pub use service::ProductService;
