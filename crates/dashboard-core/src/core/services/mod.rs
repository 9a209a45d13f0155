//! Per-domain facades that bundle the use cases over one repository.

pub mod auth_service;
pub mod config_service;
pub mod customer_service;
pub mod order_service;
pub mod supplier_service;
