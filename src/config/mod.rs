//! Immutable configuration tables, built once and passed by reference

pub mod tiers;
pub mod coils;
pub mod components;
pub mod scan;

pub use coils::{CoilEntry, CoilTable};
pub use components::{ComponentEntry, ComponentTable};
pub use scan::ScanConfig;
