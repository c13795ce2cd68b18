//! Currency helper domain.
//!
//! Holds the selected display currency and a USD-based rate table, refreshed
//! at most once per freshness window and persisted between runs.
//!
//! ## Architecture
//!
//! - `service.rs` - `CurrencyService` lifecycle, selection and conversion
//! - `source.rs` - `RateSource` trait and the open.er-api.com client
//! - `storage.rs` - `KeyValueStore` trait with memory and file backends
//! - `format.rs` - Locale-aware formatting
//! - `error.rs` - Currency error types

mod error;
pub mod format;
pub mod service;
pub mod source;
pub mod storage;

pub use error::CurrencyError;
pub use format::{LocaleStyle, currency_symbol, format_currency};
pub use service::{CurrencyEvent, CurrencyService, FALLBACK_RATES, Lifecycle, RateOrigin};
pub use source::{OpenErApiSource, RateSource, Rates};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
