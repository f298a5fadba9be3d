//! Mathematical utilities and data structures

pub mod pos;
pub mod bounds;

pub use pos::BlockPos;
pub use bounds::Bounds;
