//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs consumed by the
//! integration tests; keep schema-impacting changes explicit.

pub mod models;
