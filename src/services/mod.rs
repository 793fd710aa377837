//! Service layer containing business logic and output helpers.
//!
//! ## Service map
//! - `lookup.rs` — search/detail/category report assembly over the catalog.
//! - `display.rs` — category icon mapping with optional TOML override.
//! - `output.rs` — JSON/text output helpers and the error envelope.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod display;
pub mod lookup;
pub mod output;
