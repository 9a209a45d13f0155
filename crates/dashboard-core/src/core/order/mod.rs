//! Order management: `/orders`.

pub mod datasource;
pub mod entity;
pub mod repository;
pub mod usecase;
pub mod validation;

pub use entity::{CreateOrderPayload, Order, OrderItem, OrderStatus, UpdateOrderPayload, total_amount};
