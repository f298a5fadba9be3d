//! Upgrade planning queries over the configuration tables
//!
//! Answers "what tiers exist for this component type" and "what block
//! would this component become". Material costs and inventory checks
//! belong to the consuming layer, which takes the (group, target tier)
//! pairs produced here.

use crate::config::coils::CoilTable;
use crate::config::components::ComponentTable;
use crate::scan::classify::{ComponentInfo, ComponentType};

/// Tier numbers of the special maintenance hatch variants (LV..EV)
pub const MAINTENANCE_TIERS: [i32; 4] = [1, 2, 3, 4];

/// The configured block a component would become at a target tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeTarget<'a> {
    pub block_id: &'a str,
    pub display_name: &'a str,
}

/// Read-only upgrade queries against immutable config tables
pub struct UpgradePlanner<'a> {
    components: &'a ComponentTable,
    coils: &'a CoilTable,
}

impl<'a> UpgradePlanner<'a> {
    pub fn new(components: &'a ComponentTable, coils: &'a CoilTable) -> Self {
        Self { components, coils }
    }

    /// Sorted tiers a component of this type can exist at.
    ///
    /// Coils enumerate coil-table ordinals; maintenance hatches use
    /// their fixed variant set; everything else comes from the
    /// component table.
    pub fn available_tiers(&self, ty: ComponentType) -> Vec<i32> {
        match ty {
            ComponentType::Coil => (0..self.coils.len() as i32).collect(),
            ComponentType::Maintenance => MAINTENANCE_TIERS.to_vec(),
            _ => self.components.available_tiers(ty),
        }
    }

    /// The configured entry a component of `ty` would become at `tier`
    pub fn upgrade_target(&self, ty: ComponentType, tier: i32) -> Option<UpgradeTarget<'a>> {
        match ty {
            ComponentType::Coil => self.coils.by_tier(tier).map(|e| UpgradeTarget {
                block_id: &e.block_id,
                display_name: &e.display_name,
            }),
            ComponentType::Maintenance => Some(UpgradeTarget {
                block_id: maintenance_block_id(tier)?,
                display_name: maintenance_display_name(tier)?,
            }),
            _ => self.components.entry(ty, tier).map(|e| UpgradeTarget {
                block_id: &e.block_id,
                display_name: &e.display_name,
            }),
        }
    }

    /// Whether `component` can be upgraded to `target_tier`.
    ///
    /// Requires an upgrade-eligible type, a known current tier (tier
    /// -1 components are never upgradeable), a different target tier,
    /// and a configured entry at the target.
    pub fn can_upgrade(&self, component: &ComponentInfo, target_tier: i32) -> bool {
        component.component_type.is_upgradeable()
            && component.tier >= 0
            && target_tier != component.tier
            && self.upgrade_target(component.component_type, target_tier).is_some()
    }
}

fn maintenance_block_id(tier: i32) -> Option<&'static str> {
    match tier {
        1 => Some("gtceu:maintenance_hatch"),
        2 => Some("gtceu:configurable_maintenance_hatch"),
        3 => Some("gtceu:cleaning_maintenance_hatch"),
        4 => Some("gtceu:auto_maintenance_hatch"),
        _ => None,
    }
}

fn maintenance_display_name(tier: i32) -> Option<&'static str> {
    match tier {
        1 => Some("Maintenance Hatch"),
        2 => Some("Configurable Maintenance Hatch"),
        3 => Some("Cleaning Maintenance Hatch"),
        4 => Some("Auto Maintenance Hatch"),
        _ => None,
    }
}
