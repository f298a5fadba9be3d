//! Read-only world access: block snapshots and controller capabilities

pub mod snapshot;
pub mod status;
pub mod view;
pub mod mem;

pub use snapshot::BlockSnapshot;
pub use status::MultiblockStatus;
pub use view::{Controller, WorldView};
pub use mem::{MemoryController, MemoryWorld};
