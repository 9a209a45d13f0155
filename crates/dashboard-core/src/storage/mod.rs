use crate::error::StorageError;

pub mod config;
pub mod session_store;

type Result<T> = std::result::Result<T, StorageError>;
