//! Proxim Runtime - Tick-driven proximity evaluation
//!
//! This crate wires the proximity engine to its external collaborators:
//! - A rate gate converting the host's native tick cadence into a bounded
//!   evaluation frequency
//! - The roster snapshot capability
//! - The node driving evaluate cycles, edge-triggered enable handling,
//!   and teardown resets

pub mod node;
pub mod provider;
pub mod scheduler;

pub use node::*;
pub use provider::*;
pub use scheduler::*;
