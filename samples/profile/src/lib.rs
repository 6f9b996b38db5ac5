//! Profile sample application.
//!
//! Builds a nested profile state out of shared nodes and updates it through
//! derived and composed lenses, checking after each step which nodes were
//! copied and which stayed shared.

pub mod error;
pub mod scenario;
pub mod state;
