//! Crate-level tests for whole games.
//!
//! - **Integration tests**: full games through [`Session`](crate::session::Session)
//! - **Determinism tests**: replay and property checks over random intent
//!   sequences
//! - **Helper functions**: layouts and proptest strategies
//!
//! # Test Structure
//!
//! - `determinism.rs`: replay and invariant properties
//! - `integration.rs`: scripted games end to end
//! - `helpers.rs`: layout factories and strategies

mod helpers;

pub use helpers::*;
