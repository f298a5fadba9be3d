//! Per-type, tier-sorted component entry table

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::scan::classify::ComponentType;

use super::tiers::TIER_NAMES;

/// One configured component block type
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Full block identifier, e.g. `"gtceu:lv_input_hatch"`
    pub block_id: String,
    /// Display name, e.g. `"LV Input Hatch"`
    pub display_name: String,
    /// Tier token, e.g. `"LV"`
    pub tier_name: String,
    /// Tier number
    pub tier: i32,
    /// Functional component type
    pub component_type: ComponentType,
}

/// On-disk config file shape
#[derive(Serialize, Deserialize)]
struct ComponentFile {
    #[serde(default)]
    version: String,
    #[serde(default)]
    description: String,
    components: Vec<ComponentEntry>,
}

/// Immutable component table, entries grouped by type and sorted by tier
#[derive(Clone, Debug)]
pub struct ComponentTable {
    by_type: HashMap<ComponentType, Vec<ComponentEntry>>,
}

impl ComponentTable {
    /// Build a table from entries: invalid entries are skipped with a
    /// warning, the rest are grouped by type and sorted by tier.
    pub fn new(entries: Vec<ComponentEntry>) -> Self {
        let mut by_type: HashMap<ComponentType, Vec<ComponentEntry>> = HashMap::new();
        for entry in entries {
            if entry.block_id.is_empty() || entry.tier < 0 {
                log::warn!("skipping invalid component entry: {:?}", entry.block_id);
                continue;
            }
            by_type.entry(entry.component_type).or_default().push(entry);
        }
        for list in by_type.values_mut() {
            list.sort_by_key(|e| e.tier);
        }
        Self { by_type }
    }

    /// Load a table from a JSON config file. A missing file yields the
    /// built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("component config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let file: ComponentFile = serde_json::from_str(&json)?;
        let table = Self::new(file.components);
        log::info!(
            "loaded {} component entries from {}",
            table.by_type.values().map(Vec::len).sum::<usize>(),
            path.display()
        );
        Ok(table)
    }

    /// Write the table to a JSON config file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut components: Vec<ComponentEntry> =
            self.by_type.values().flatten().cloned().collect();
        components.sort_by(|a, b| {
            (a.component_type, a.tier).cmp(&(b.component_type, b.tier))
        });
        let file = ComponentFile {
            version: "1.0".to_string(),
            description: "Component configuration".to_string(),
            components,
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Tier-sorted entries for a component type
    pub fn entries_of(&self, ty: ComponentType) -> &[ComponentEntry] {
        self.by_type.get(&ty).map_or(&[], Vec::as_slice)
    }

    /// Entry for the exact (type, tier) pair
    pub fn entry(&self, ty: ComponentType, tier: i32) -> Option<&ComponentEntry> {
        self.entries_of(ty).iter().find(|e| e.tier == tier)
    }

    /// Sorted tiers with a configured entry for the type
    pub fn available_tiers(&self, ty: ComponentType) -> Vec<i32> {
        self.entries_of(ty).iter().map(|e| e.tier).collect()
    }

    /// Highest configured tier for the type, or -1 if none
    pub fn max_tier(&self, ty: ComponentType) -> i32 {
        self.entries_of(ty).iter().map(|e| e.tier).max().unwrap_or(-1)
    }

    /// Whether the (type, tier) pair has a configured entry
    pub fn is_valid_tier(&self, ty: ComponentType, tier: i32) -> bool {
        self.entry(ty, tier).is_some()
    }
}

impl Default for ComponentTable {
    fn default() -> Self {
        // Stock entries for LV (tier 1) through UHV (tier 9).
        let kinds = [
            ("input_hatch", "Input Hatch", ComponentType::InputHatch),
            ("output_hatch", "Output Hatch", ComponentType::OutputHatch),
            ("input_bus", "Input Bus", ComponentType::InputBus),
            ("output_bus", "Output Bus", ComponentType::OutputBus),
            ("energy_input_hatch", "Energy Input Hatch", ComponentType::EnergyHatch),
        ];
        let mut entries = Vec::new();
        for tier in 1..=9 {
            let token = TIER_NAMES[tier as usize];
            let upper = token.to_ascii_uppercase();
            for &(suffix, label, ty) in &kinds {
                entries.push(ComponentEntry {
                    block_id: format!("gtceu:{token}_{suffix}"),
                    display_name: format!("{upper} {label}"),
                    tier_name: upper.clone(),
                    tier,
                    component_type: ty,
                });
            }
        }
        // Mufflers ship LV (1) through UV (8); parallel hatches exist
        // only IV (5) through UV (8). Parallel hatch display names
        // carry no tier prefix.
        for tier in 1..=8 {
            let token = TIER_NAMES[tier as usize];
            let upper = token.to_ascii_uppercase();
            entries.push(ComponentEntry {
                block_id: format!("gtceu:{token}_muffler_hatch"),
                display_name: format!("{upper} Muffler Hatch"),
                tier_name: upper.clone(),
                tier,
                component_type: ComponentType::Muffler,
            });
            if tier >= 5 {
                entries.push(ComponentEntry {
                    block_id: format!("gtceu:{token}_parallel_hatch"),
                    display_name: "Parallel Hatch".to_string(),
                    tier_name: upper,
                    tier,
                    component_type: ComponentType::ParallelHatch,
                });
            }
        }
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_table() {
        let table = ComponentTable::default();
        assert_eq!(table.entries_of(ComponentType::InputHatch).len(), 9);
        assert_eq!(table.available_tiers(ComponentType::EnergyHatch), (1..=9).collect::<Vec<_>>());
        assert_eq!(table.max_tier(ComponentType::OutputBus), 9);
        assert_eq!(table.max_tier(ComponentType::DualHatch), -1);

        let lv = table.entry(ComponentType::InputHatch, 1).unwrap();
        assert_eq!(lv.block_id, "gtceu:lv_input_hatch");
        assert_eq!(lv.display_name, "LV Input Hatch");
    }

    #[test]
    fn test_default_mufflers_and_parallel_hatches() {
        let table = ComponentTable::default();

        assert_eq!(table.available_tiers(ComponentType::Muffler), (1..=8).collect::<Vec<_>>());
        assert_eq!(
            table.entry(ComponentType::Muffler, 1).unwrap().block_id,
            "gtceu:lv_muffler_hatch"
        );

        assert_eq!(table.available_tiers(ComponentType::ParallelHatch), vec![5, 6, 7, 8]);
        let zpm = table.entry(ComponentType::ParallelHatch, 7).unwrap();
        assert_eq!(zpm.block_id, "gtceu:zpm_parallel_hatch");
        assert_eq!(zpm.display_name, "Parallel Hatch");
    }

    #[test]
    fn test_entries_sorted_by_tier() {
        let mk = |tier: i32| ComponentEntry {
            block_id: format!("mod:t{tier}_input_bus"),
            display_name: format!("T{tier} Input Bus"),
            tier_name: format!("T{tier}"),
            tier,
            component_type: ComponentType::InputBus,
        };
        let table = ComponentTable::new(vec![mk(5), mk(1), mk(3)]);
        assert_eq!(table.available_tiers(ComponentType::InputBus), vec![1, 3, 5]);
    }

    #[test]
    fn test_invalid_entries_skipped() {
        let table = ComponentTable::new(vec![ComponentEntry {
            block_id: String::new(),
            display_name: "broken".to_string(),
            tier_name: "LV".to_string(),
            tier: 1,
            component_type: ComponentType::Muffler,
        }]);
        assert!(table.entries_of(ComponentType::Muffler).is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("components.json");

        let table = ComponentTable::default();
        table.save(&path).unwrap();

        let loaded = ComponentTable::from_file(&path).unwrap();
        assert_eq!(
            loaded.entry(ComponentType::EnergyHatch, 4).unwrap().block_id,
            "gtceu:ev_energy_input_hatch"
        );
    }

    #[test]
    fn test_component_type_json_names() {
        // File format stores types in SCREAMING_SNAKE_CASE.
        let json = serde_json::to_string(&ComponentType::InputHatch).unwrap();
        assert_eq!(json, "\"INPUT_HATCH\"");
    }
}
