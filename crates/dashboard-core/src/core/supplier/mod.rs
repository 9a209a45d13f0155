//! Supplier management: `/suppliers`.

pub mod datasource;
pub mod entity;
pub mod repository;
pub mod usecase;
pub mod validation;

pub use entity::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};
