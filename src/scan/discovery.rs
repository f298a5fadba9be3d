//! Discovery service: radius scan for controllers, per-structure
//! component scans

use std::collections::{BTreeMap, HashSet};

use crate::config::coils::CoilTable;
use crate::config::scan::ScanConfig;
use crate::core::Result;
use crate::math::{BlockPos, Bounds};
use crate::world::{Controller, MultiblockStatus, WorldView};

use super::candidate::CandidateFilter;
use super::classify::{Classifier, ComponentInfo, ComponentType};
use super::flood;
use super::group::{group_components, ComponentGroup};

/// One discovered multiblock structure. Built fresh per scan call and
/// never mutated afterwards.
pub struct MultiblockInfo<'w> {
    /// The controller entity, borrowed from the scanned world view
    pub controller: &'w dyn Controller,
    pub name: String,
    pub pos: BlockPos,
    /// Declared tier of the whole structure
    pub tier: i32,
    /// Euclidean distance from the scan reference to the controller
    pub distance: f64,
    pub formed: bool,
    pub status: MultiblockStatus,
    /// Classified components, declared parts first then discovered
    /// cells in position order
    pub components: Vec<ComponentInfo>,
    /// Components partitioned by exact (type, tier)
    pub groups: Vec<ComponentGroup>,
}

/// Tally of every non-air block in one structure's footprint, for the
/// schematic layer's "what does this structure contain" queries.
#[derive(Clone, Debug, Default)]
pub struct BlockCensus {
    /// Block count per identifier, iterated in identifier order
    pub counts: BTreeMap<String, usize>,
}

impl BlockCensus {
    /// Total number of tallied blocks
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct block identifiers
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

/// Stateless discovery scanner. Each [`scan`](Self::scan) call is an
/// idempotent function of the world view and its parameters; nothing
/// is cached across calls.
pub struct MultiblockDiscovery<'a> {
    config: &'a ScanConfig,
    coils: &'a CoilTable,
}

impl<'a> MultiblockDiscovery<'a> {
    pub fn new(config: &'a ScanConfig, coils: &'a CoilTable) -> Self {
        Self { config, coils }
    }

    /// Find all multiblock controllers within `radius` of `reference`
    /// and scan each formed structure's components.
    ///
    /// A failure while scanning one structure is logged and leaves
    /// that entry with empty components; it never aborts the rest of
    /// the scan. The result is sorted ascending by distance, with
    /// lexicographic position order breaking ties.
    pub fn scan<'w>(
        &self,
        world: &'w dyn WorldView,
        reference: BlockPos,
        radius: i32,
    ) -> Vec<MultiblockInfo<'w>> {
        let mut found = Vec::new();

        for x in reference.x - radius..=reference.x + radius {
            for y in reference.y - radius..=reference.y + radius {
                for z in reference.z - radius..=reference.z + radius {
                    let pos = BlockPos::new(x, y, z);
                    let Some(controller) = world.controller_at(pos) else {
                        continue;
                    };

                    let formed = controller.is_formed();
                    let mut info = MultiblockInfo {
                        controller,
                        name: multiblock_name(controller),
                        pos,
                        tier: controller.declared_tier(),
                        distance: reference.distance_to(pos),
                        formed,
                        status: if formed {
                            controller.status()
                        } else {
                            MultiblockStatus::Unformed
                        },
                        components: Vec::new(),
                        groups: Vec::new(),
                    };

                    if formed {
                        match self.scan_components(world, controller) {
                            Ok(components) => {
                                info.groups = group_components(components.clone());
                                info.components = components;
                            }
                            Err(e) => {
                                log::error!("component scan failed at {:?}: {}", pos, e);
                            }
                        }
                    }

                    found.push(info);
                }
            }
        }

        found.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.pos.cmp(&b.pos))
        });
        found
    }

    /// Walk one formed structure and classify its components.
    ///
    /// Declared parts are always retained; cells found by the flood
    /// fill are retained only when upgrade-eligible or coils.
    /// Everything is deduplicated by coordinate.
    fn scan_components(
        &self,
        world: &dyn WorldView,
        controller: &dyn Controller,
    ) -> Result<Vec<ComponentInfo>> {
        let controller_pos = controller.position();
        let parts = controller.parts()?;

        let cells = self.structure_cells(world, controller_pos, &parts);
        let classifier = Classifier::new(self.coils);

        let mut seen: HashSet<BlockPos> = HashSet::new();
        let mut components = Vec::new();

        for &pos in &parts {
            if !seen.insert(pos) {
                continue;
            }
            let snapshot = world.snapshot(pos);
            if snapshot.is_air {
                continue;
            }
            components.push(classifier.classify_at(pos, snapshot));
        }

        for pos in cells {
            if !seen.insert(pos) {
                continue;
            }
            let snapshot = world.snapshot(pos);
            if snapshot.is_air {
                continue;
            }
            let component = classifier.classify_at(pos, snapshot);
            if component.component_type.is_upgradeable()
                || component.component_type == ComponentType::Coil
            {
                components.push(component);
            }
        }

        log::debug!(
            "scanned {} components for multiblock at {:?}",
            components.len(),
            controller_pos
        );
        Ok(components)
    }

    /// Tally every non-air block in one formed structure's footprint
    pub fn census(&self, world: &dyn WorldView, controller: &dyn Controller) -> Result<BlockCensus> {
        let controller_pos = controller.position();
        let parts = controller.parts()?;

        let mut census = BlockCensus::default();
        let mut cells = self.structure_cells(world, controller_pos, &parts);
        cells.extend(parts);

        for pos in cells {
            let snapshot = world.snapshot(pos);
            if !snapshot.is_air {
                *census.counts.entry(snapshot.id).or_insert(0) += 1;
            }
        }
        Ok(census)
    }

    /// Bounded flood fill from the controller and declared parts
    fn structure_cells(
        &self,
        world: &dyn WorldView,
        controller_pos: BlockPos,
        parts: &[BlockPos],
    ) -> std::collections::BTreeSet<BlockPos> {
        let mut anchors = Vec::with_capacity(parts.len() + 1);
        anchors.push(controller_pos);
        anchors.extend_from_slice(parts);

        let bounds = Bounds::from_anchors(&anchors, self.config.bounds_padding)
            .clamp_to_max_size(controller_pos, self.config.max_scan_xz, self.config.max_scan_y);

        let filter = CandidateFilter::new(self.config, self.coils);
        flood::discover(world, &filter, &bounds, controller_pos, &anchors)
    }
}

/// Display name of a controller, falling back to a cleaned-up type tag
/// when the declared name is empty or an unresolved localization key.
fn multiblock_name(controller: &dyn Controller) -> String {
    let display = controller.display_name();
    if !display.is_empty() && !display.contains("block.") {
        return display;
    }

    let name = controller
        .type_tag()
        .replace("MetaTileEntity", "")
        .replace("Machine", "")
        .replace("Controller", "");

    if name.is_empty() {
        "Unknown Multiblock".to_string()
    } else {
        name
    }
}
