//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Conversions from reqwest/serde errors into transport errors
pub mod error_helpers;

/// Field predicates and configuration value validation
pub mod validation;
