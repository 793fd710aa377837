//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Match CLI inputs here.
//! - Delegate business logic to `services/*` and the catalog core.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_command;
