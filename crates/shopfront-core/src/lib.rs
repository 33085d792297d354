//! Shopfront Core - Domain models and shared types
//!
//! This crate defines the core abstractions used throughout the shopfront:
//! - Catalog tokens (colors, sizes, sort orders) and product metadata
//! - Filter state with toggle semantics
//! - The clause builder that turns a filter payload into a boolean
//!   filter string for the vector index
//! - Configuration management
//! - Common error types

pub mod catalog;
pub mod clause;
pub mod config;
pub mod filter;

pub use catalog::{
    Color, PricePreset, Product, Size, SortOrder, DEFAULT_PRICE_RANGE, PRICE_PRESETS, RESULT_CAP,
};
pub use clause::{build_clause, FilterClause};
pub use config::{AppConfig, ClientConfig, ConfigError, IndexConfig, ServerConfig};
pub use filter::{FilterCategory, FilterPayload, FilterState, PriceSelection};

use thiserror::Error;

/// Core error types for shopfront operations
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Index error: {0}")]
    IndexError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
