//! World access traits consumed by the scanner

use crate::core::Result;
use crate::math::BlockPos;

use super::snapshot::BlockSnapshot;
use super::status::MultiblockStatus;

/// Read-only view of the world grid for the duration of one scan.
///
/// The scanner never writes through this trait. If the underlying grid
/// can mutate concurrently, hand the scanner a frozen copy (see
/// [`MemoryWorld`](super::mem::MemoryWorld)) or accept that a scan may
/// observe a torn state.
pub trait WorldView {
    /// Snapshot of the cell at `pos`. Never absent: empty cells come
    /// back with the air flag set.
    fn snapshot(&self, pos: BlockPos) -> BlockSnapshot;

    /// Controller capability at `pos`, if the cell hosts a multiblock
    /// controller. Resolved once per coordinate; callers never need
    /// further type inspection.
    fn controller_at(&self, pos: BlockPos) -> Option<&dyn Controller>;
}

/// Capability interface of a multiblock controller entity
pub trait Controller {
    /// Position of the controller block
    fn position(&self) -> BlockPos;

    /// Whether the structure pattern is currently formed
    fn is_formed(&self) -> bool;

    /// Positions of the declared structure parts.
    ///
    /// Fallible: backing structure data can be corrupt, and a failure
    /// here must not abort scans of other structures.
    fn parts(&self) -> Result<Vec<BlockPos>>;

    /// Declared display name. May be empty or an unresolved
    /// localization key; see the discovery service's name fallback.
    fn display_name(&self) -> String;

    /// Raw machine type tag, used when the display name is unusable
    fn type_tag(&self) -> String;

    /// Declared technology tier of the whole structure
    fn declared_tier(&self) -> i32;

    /// Current operational status
    fn status(&self) -> MultiblockStatus;
}
