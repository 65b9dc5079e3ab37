//! Numeric Operations Test Suite
//!
//! End-to-end tests through the public `polynum` surface.
//!
//! ## Modules
//!
//! - **registry**: resolution, caching, explicit registration, custom types
//! - **providers**: the provider chain and its ordering rules
//! - **nullable**: lifting of every operation over `Option<T>`
//! - **enums**: `numeric_enum!` types delegating to their representation
//! - **text**: parsing and formatting across kinds, styles and cultures
//! - **conversion**: the scalar pivot between every pair of kinds
//! - **properties**: algebraic properties (proptest)
//! - **culture_config**: TOML culture files
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test numeric
//!
//! # Only the property-based tests
//! cargo test --test numeric properties
//! ```

#[path = "../common/mod.rs"]
mod common;

mod conversion;
mod enums;
mod properties;
mod registry;
mod text;
