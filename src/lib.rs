//! Multiscan - multiblock structure discovery and classification

pub mod core;
pub mod math;
pub mod world;
pub mod config;
pub mod scan;
pub mod upgrade;
