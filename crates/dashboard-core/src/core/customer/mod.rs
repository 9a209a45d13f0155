//! Customer management: `/customers`.

pub mod datasource;
pub mod entity;
pub mod repository;
pub mod usecase;
pub mod validation;

pub use entity::{CreateCustomerPayload, Customer, UpdateCustomerPayload};
