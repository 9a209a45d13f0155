pub mod auth;
pub mod common;
pub mod customer;
pub mod order;
pub mod services;
pub mod session;
pub mod supplier;
