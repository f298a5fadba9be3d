//! Component classification: identifier -> (type, tier)

use serde::{Deserialize, Serialize};

use crate::config::coils::CoilTable;
use crate::config::tiers::tier_from_identifier;
use crate::math::BlockPos;
use crate::world::BlockSnapshot;

/// Functional component types. Closed set; identifiers that match no
/// rule classify as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    InputHatch,
    OutputHatch,
    DualHatch,
    InputBus,
    OutputBus,
    EnergyHatch,
    Muffler,
    Maintenance,
    Coil,
    ParallelHatch,
    Pipe,
    Casing,
    Other,
}

impl ComponentType {
    /// Whether components of this type take tier-exact upgrades from
    /// the component table. Coils are tiered via the coil table
    /// instead; pipes, casings and unclassified blocks never upgrade.
    pub fn is_upgradeable(&self) -> bool {
        matches!(
            self,
            Self::InputHatch
                | Self::OutputHatch
                | Self::DualHatch
                | Self::InputBus
                | Self::OutputBus
                | Self::EnergyHatch
                | Self::Muffler
                | Self::Maintenance
                | Self::ParallelHatch
        )
    }

    /// Human-readable type label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::InputHatch => "Input Hatch",
            Self::OutputHatch => "Output Hatch",
            Self::DualHatch => "Dual Hatch",
            Self::InputBus => "Input Bus",
            Self::OutputBus => "Output Bus",
            Self::EnergyHatch => "Energy Hatch",
            Self::Muffler => "Muffler Hatch",
            Self::Maintenance => "Maintenance Hatch",
            Self::Coil => "Coil",
            Self::ParallelHatch => "Parallel Hatch",
            Self::Pipe => "Pipe",
            Self::Casing => "Casing",
            Self::Other => "Other",
        }
    }
}

/// Component type of a block identifier path.
///
/// The rule chain is ordered: identifiers can match several rules at
/// once (an energy input hatch contains both "energy" and
/// "input_hatch"), and the first match wins.
pub fn component_type_of(identifier: &str) -> ComponentType {
    let lower = identifier.to_ascii_lowercase();

    if lower.contains("energy") || lower.contains("dynamo") {
        ComponentType::EnergyHatch
    } else if lower.contains("parallel_hatch") {
        ComponentType::ParallelHatch
    } else if lower.contains("dual") {
        ComponentType::DualHatch
    } else if lower.contains("input_hatch") || lower.contains("import_hatch") {
        ComponentType::InputHatch
    } else if lower.contains("output_hatch") || lower.contains("export_hatch") {
        ComponentType::OutputHatch
    } else if lower.contains("input_bus") || lower.contains("import_bus") {
        ComponentType::InputBus
    } else if lower.contains("output_bus") || lower.contains("export_bus") {
        ComponentType::OutputBus
    } else if lower.contains("muffler") {
        ComponentType::Muffler
    } else if lower.contains("maintenance") {
        ComponentType::Maintenance
    } else if lower.contains("coil") {
        ComponentType::Coil
    } else if lower.contains("pipe") {
        ComponentType::Pipe
    } else if lower.contains("casing") {
        ComponentType::Casing
    } else {
        ComponentType::Other
    }
}

/// One classified component cell. Immutable once created.
#[derive(Clone, Debug)]
pub struct ComponentInfo {
    pub component_type: ComponentType,
    /// Technology tier; -1 = unknown (never upgradeable)
    pub tier: i32,
    pub pos: BlockPos,
    pub snapshot: BlockSnapshot,
}

/// Classifies block snapshots against the coil table
pub struct Classifier<'a> {
    coils: &'a CoilTable,
}

impl<'a> Classifier<'a> {
    pub fn new(coils: &'a CoilTable) -> Self {
        Self { coils }
    }

    /// Classify an identifier into (type, tier).
    ///
    /// Coils are tiered by their ordinal in the temperature-sorted
    /// coil table; everything else by the first tier token found in
    /// the identifier.
    pub fn classify(&self, snapshot: &BlockSnapshot) -> (ComponentType, i32) {
        let ty = component_type_of(snapshot.path());
        let tier = if ty == ComponentType::Coil {
            self.coils.coil_tier(snapshot)
        } else {
            tier_from_identifier(snapshot.path())
        };
        (ty, tier)
    }

    /// Classify the snapshot at `pos` into a [`ComponentInfo`]
    pub fn classify_at(&self, pos: BlockPos, snapshot: BlockSnapshot) -> ComponentInfo {
        let (component_type, tier) = self.classify(&snapshot);
        ComponentInfo {
            component_type,
            tier,
            pos,
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_wins_over_input_hatch() {
        // "lv_energy_input_hatch" contains both "energy" and
        // "input_hatch"; the energy rule runs first.
        let coils = CoilTable::default();
        let classifier = Classifier::new(&coils);
        let (ty, tier) = classifier.classify(&BlockSnapshot::new("gtceu:lv_energy_input_hatch"));
        assert_eq!(ty, ComponentType::EnergyHatch);
        assert_eq!(tier, 1);
    }

    #[test]
    fn test_type_rules() {
        assert_eq!(component_type_of("hv_input_hatch"), ComponentType::InputHatch);
        assert_eq!(component_type_of("hv_export_hatch"), ComponentType::OutputHatch);
        assert_eq!(component_type_of("mv_input_bus"), ComponentType::InputBus);
        assert_eq!(component_type_of("mv_output_bus"), ComponentType::OutputBus);
        assert_eq!(component_type_of("ev_dynamo_hatch"), ComponentType::EnergyHatch);
        assert_eq!(component_type_of("iv_parallel_hatch"), ComponentType::ParallelHatch);
        assert_eq!(component_type_of("lv_dual_input_hatch"), ComponentType::DualHatch);
        assert_eq!(component_type_of("muffler_hatch"), ComponentType::Muffler);
        assert_eq!(component_type_of("cleaning_maintenance_hatch"), ComponentType::Maintenance);
        assert_eq!(component_type_of("kanthal_coil_block"), ComponentType::Coil);
        assert_eq!(component_type_of("bronze_pipe_casing"), ComponentType::Pipe);
        assert_eq!(component_type_of("heatproof_casing"), ComponentType::Casing);
        assert_eq!(component_type_of("iron_block"), ComponentType::Other);
    }

    #[test]
    fn test_coil_tier_is_table_ordinal() {
        let coils = CoilTable::default();
        let classifier = Classifier::new(&coils);
        let (ty, tier) =
            classifier.classify(&BlockSnapshot::new("gtceu:cupronickel_coil_block"));
        assert_eq!(ty, ComponentType::Coil);
        assert_eq!(tier, 0);

        let (_, tier) = classifier.classify(&BlockSnapshot::new("gtceu:naquadah_coil_block"));
        assert_eq!(tier, 5);
    }

    #[test]
    fn test_unknown_tier_is_minus_one() {
        let coils = CoilTable::default();
        let classifier = Classifier::new(&coils);

        // No tier token in the identifier.
        let (ty, tier) = classifier.classify(&BlockSnapshot::new("gtceu:steam_input_bus"));
        assert_eq!(ty, ComponentType::InputBus);
        assert_eq!(tier, -1);

        // Coil not present in the table.
        let (ty, tier) = classifier.classify(&BlockSnapshot::new("mod:mystery_coil_block"));
        assert_eq!(ty, ComponentType::Coil);
        assert_eq!(tier, -1);
    }

    #[test]
    fn test_upgradeable_set() {
        assert!(ComponentType::InputHatch.is_upgradeable());
        assert!(ComponentType::EnergyHatch.is_upgradeable());
        assert!(ComponentType::Maintenance.is_upgradeable());
        assert!(!ComponentType::Coil.is_upgradeable());
        assert!(!ComponentType::Pipe.is_upgradeable());
        assert!(!ComponentType::Casing.is_upgradeable());
        assert!(!ComponentType::Other.is_upgradeable());
    }
}
