//! Demo login against `GET /auth`.

pub mod datasource;
pub mod entity;
pub mod repository;
pub mod usecase;
pub mod validation;

pub use entity::{AuthPayload, AuthResponse, User};
