//! Proxim Engine - Proximity matrix evaluation
//!
//! This crate implements the proximity matrix engine:
//! - Roster filtering (candidates and the live subset)
//! - Two-phase evaluate-and-reconcile over every ordered pair
//! - Full reset back to host-default behavior
//! - Per-cycle outcome counters

pub mod engine;
pub mod roster;

pub use engine::*;
pub use roster::*;
