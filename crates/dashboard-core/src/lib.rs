//! # dashboard-core
//!
//! Core library for the admin dashboard API.
//!
//! This crate provides the functionality used by `dashboard-cli`: the shared
//! result type and error taxonomy, per-entity validation, HTTP datasources,
//! repositories and use cases for authentication, customers, orders and
//! suppliers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dashboard_core::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> dashboard_core::Result<()> {
//!     let client = DashboardClient::new("http://localhost:4200".to_string())?;
//!     let customers = CustomerService::remote(Arc::new(client), true);
//!
//!     match customers.list(PaginationParams::new(1, 10)).await {
//!         Ok(page) => println!("{} of {} customers", page.data.len(), page.total),
//!         Err(failure) => eprintln!("{}: {}", failure.code, failure.message),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           Use cases                 │  validate, then delegate
//! ├─────────────────────────────────────┤
//! │          Repositories               │  capability traits, pass-through
//! ├─────────────────────────────────────┤
//! │          Datasources                │  HTTP verb + error classification
//! ├─────────────────────────────────────┤
//! │         HTTP transport              │  reqwest, bearer token, timeout
//! └─────────────────────────────────────┘
//! ```
//!
//! Every layer returns [`ApiResult`]: a failure carries one of the six
//! [`ErrorCode`]s and a message, and is propagated unchanged back to the
//! caller.

pub use crate::core::common::result::{ApiResult, ErrorCode, Failure, failure, success};
pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use dashboard_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::core::common::pagination::{PaginatedResponse, PaginationParams};
    pub use crate::core::common::result::{
        ApiResult, ErrorCode, Failure, failure, success, to_envelope,
    };
    pub use crate::core::common::status::AccountStatus;

    pub use crate::api::client::DashboardClient;
    pub use crate::api::transport::{HttpTransport, TransportError};

    pub use crate::core::auth::{AuthPayload, AuthResponse, User};
    pub use crate::core::customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload};
    pub use crate::core::order::{
        CreateOrderPayload, Order, OrderItem, OrderStatus, UpdateOrderPayload,
    };
    pub use crate::core::session::Session;
    pub use crate::core::supplier::{CreateSupplierPayload, Supplier, UpdateSupplierPayload};

    pub use crate::core::services::auth_service::AuthService;
    pub use crate::core::services::config_service::ConfigService;
    pub use crate::core::services::customer_service::CustomerService;
    pub use crate::core::services::order_service::OrderService;
    pub use crate::core::services::supplier_service::SupplierService;

    pub use crate::storage::config::{Config, SessionBackend};
    pub use crate::storage::session_store::{
        FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore,
    };
}

/// HTTP layer - transport trait and the reqwest-backed client.
pub mod api;

/// Business logic layer.
///
/// - [`core::common`]: result type, error codes, pagination, error mapping
/// - [`core::auth`], [`core::customer`], [`core::order`], [`core::supplier`]:
///   entity, validation, datasource, repository and use cases per domain
/// - [`core::services`]: per-domain facades and the session lifecycle
pub mod core;

/// Storage layer - configuration file and session persistence.
pub mod storage;

/// Utilities layer - shared validation predicates and error conversions.
pub mod utils;

/// Error handling for everything outside the request pipeline.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
