//! In-memory world: a frozen grid snapshot for scans and tests

use std::collections::HashMap;

use crate::core::Result;
use crate::math::BlockPos;

use super::snapshot::BlockSnapshot;
use super::status::MultiblockStatus;
use super::view::{Controller, WorldView};

/// A [`WorldView`] backed by hash maps.
///
/// Serves as the frozen/copy-on-read view for environments where the
/// live grid can mutate during a scan, and as the world double in
/// tests and benches.
#[derive(Default)]
pub struct MemoryWorld {
    blocks: HashMap<BlockPos, BlockSnapshot>,
    controllers: HashMap<BlockPos, Box<dyn Controller>>,
}

impl MemoryWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block with the given identifier
    pub fn set_block(&mut self, pos: BlockPos, id: impl Into<String>) {
        self.blocks.insert(pos, BlockSnapshot::new(id));
    }

    /// Remove the block at `pos` (the cell reads back as air)
    pub fn clear_block(&mut self, pos: BlockPos) {
        self.blocks.remove(&pos);
    }

    /// Register a controller entity at its own position
    pub fn add_controller(&mut self, controller: Box<dyn Controller>) {
        self.controllers.insert(controller.position(), controller);
    }

    /// Number of placed blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl WorldView for MemoryWorld {
    fn snapshot(&self, pos: BlockPos) -> BlockSnapshot {
        match self.blocks.get(&pos) {
            Some(s) => s.clone(),
            None => BlockSnapshot::air(),
        }
    }

    fn controller_at(&self, pos: BlockPos) -> Option<&dyn Controller> {
        self.controllers.get(&pos).map(|c| c.as_ref())
    }
}

/// A [`Controller`] with fixed declared data
pub struct MemoryController {
    pub pos: BlockPos,
    pub formed: bool,
    pub parts: Vec<BlockPos>,
    pub display_name: String,
    pub type_tag: String,
    pub tier: i32,
    pub status: MultiblockStatus,
}

impl MemoryController {
    /// Formed controller with the given name and parts
    pub fn new(pos: BlockPos, display_name: impl Into<String>, parts: Vec<BlockPos>) -> Self {
        Self {
            pos,
            formed: true,
            parts,
            display_name: display_name.into(),
            type_tag: String::new(),
            tier: 0,
            status: MultiblockStatus::Idle,
        }
    }

    /// Unformed controller with no declared parts
    pub fn unformed(pos: BlockPos, display_name: impl Into<String>) -> Self {
        Self {
            pos,
            formed: false,
            parts: Vec::new(),
            display_name: display_name.into(),
            type_tag: String::new(),
            tier: 0,
            status: MultiblockStatus::Unformed,
        }
    }
}

impl Controller for MemoryController {
    fn position(&self) -> BlockPos {
        self.pos
    }

    fn is_formed(&self) -> bool {
        self.formed
    }

    fn parts(&self) -> Result<Vec<BlockPos>> {
        Ok(self.parts.clone())
    }

    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn type_tag(&self) -> String {
        self.type_tag.clone()
    }

    fn declared_tier(&self) -> i32 {
        self.tier
    }

    fn status(&self) -> MultiblockStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_never_absent() {
        let world = MemoryWorld::new();
        let s = world.snapshot(BlockPos::new(10, 20, 30));
        assert!(s.is_air);
    }

    #[test]
    fn test_set_and_clear_block() {
        let mut world = MemoryWorld::new();
        let pos = BlockPos::new(0, 0, 0);
        world.set_block(pos, "gtceu:heatproof_casing");
        assert_eq!(world.snapshot(pos).id, "gtceu:heatproof_casing");
        world.clear_block(pos);
        assert!(world.snapshot(pos).is_air);
    }

    #[test]
    fn test_controller_lookup() {
        let mut world = MemoryWorld::new();
        let pos = BlockPos::new(1, 2, 3);
        world.add_controller(Box::new(MemoryController::new(pos, "Test Furnace", vec![])));

        assert!(world.controller_at(pos).is_some());
        assert!(world.controller_at(BlockPos::new(0, 0, 0)).is_none());
    }
}
