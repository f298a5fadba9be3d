//! Coil table: temperature-ordered coil block entries
//!
//! A coil's tier is its ordinal position in the temperature-ascending
//! table, not the raw configured tier field. Ordinals stay contiguous
//! even when a pack skips configured tiers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::world::BlockSnapshot;

/// One configured coil block type
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoilEntry {
    /// Full block identifier, e.g. `"gtceu:cupronickel_coil_block"`
    pub block_id: String,
    /// Display name, e.g. `"Cupronickel Coil"`
    pub display_name: String,
    /// Operating temperature in kelvin
    pub temperature: i32,
    /// Raw configured tier field (informational; ordinal position wins)
    pub tier: i32,
}

/// On-disk config file shape
#[derive(Serialize, Deserialize)]
struct CoilFile {
    #[serde(default)]
    version: String,
    #[serde(default)]
    description: String,
    coils: Vec<CoilEntry>,
}

/// Immutable, temperature-sorted coil table
#[derive(Clone, Debug)]
pub struct CoilTable {
    entries: Vec<CoilEntry>,
}

impl CoilTable {
    /// Build a table from entries: invalid entries are skipped with a
    /// warning, the rest are sorted ascending by temperature.
    pub fn new(entries: Vec<CoilEntry>) -> Self {
        let mut valid: Vec<CoilEntry> = entries
            .into_iter()
            .filter(|e| {
                if validate_entry(e) {
                    true
                } else {
                    log::warn!("skipping invalid coil entry: {:?}", e.block_id);
                    false
                }
            })
            .collect();
        valid.sort_by_key(|e| e.temperature);
        Self { entries: valid }
    }

    /// Load a table from a JSON config file. A missing file yields the
    /// built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("coil config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let file: CoilFile = serde_json::from_str(&json)?;
        let table = Self::new(file.coils);
        log::info!(
            "loaded {} coil types from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Write the table to a JSON config file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = CoilFile {
            version: "1.0".to_string(),
            description: "Coil configuration".to_string(),
            coils: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Ordinal coil tier of the block in `snapshot`, or -1 if the
    /// block is not a configured coil.
    ///
    /// A temperature tie makes the ordinal ambiguous, so tied entries
    /// also yield -1 ("unknown").
    pub fn coil_tier(&self, snapshot: &BlockSnapshot) -> i32 {
        let Some(i) = self.entries.iter().position(|e| e.block_id == snapshot.id) else {
            return -1;
        };
        let temp = self.entries[i].temperature;
        let tied = (i > 0 && self.entries[i - 1].temperature == temp)
            || self.entries.get(i + 1).is_some_and(|e| e.temperature == temp);
        if tied { -1 } else { i as i32 }
    }

    /// Entry at the given ordinal tier
    pub fn by_tier(&self, tier: i32) -> Option<&CoilEntry> {
        usize::try_from(tier).ok().and_then(|i| self.entries.get(i))
    }

    /// Display name with temperature, e.g. `"Kanthal Coil (2700K)"`
    pub fn display_name(&self, tier: i32) -> String {
        match self.by_tier(tier) {
            Some(e) => format!("{} ({}K)", e.display_name, e.temperature),
            None => "Unknown Coil".to_string(),
        }
    }

    /// Highest ordinal tier, or -1 for an empty table
    pub fn max_tier(&self) -> i32 {
        self.entries.len() as i32 - 1
    }

    /// Whether `tier` addresses a configured coil
    pub fn is_valid_tier(&self, tier: i32) -> bool {
        tier >= 0 && tier <= self.max_tier()
    }

    /// Number of configured coil types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no coils are configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CoilTable {
    fn default() -> Self {
        let stock = [
            ("gtceu:cupronickel_coil_block", "Cupronickel Coil", 1800),
            ("gtceu:kanthal_coil_block", "Kanthal Coil", 2700),
            ("gtceu:nichrome_coil_block", "Nichrome Coil", 3600),
            ("gtceu:rtm_alloy_coil_block", "RTM Alloy Coil", 4500),
            ("gtceu:hssg_coil_block", "HSS-G Coil", 5400),
            ("gtceu:naquadah_coil_block", "Naquadah Coil", 7200),
            ("gtceu:trinium_coil_block", "Trinium Coil", 9000),
            ("gtceu:tritanium_coil_block", "Tritanium Coil", 10800),
        ];
        let entries = stock
            .iter()
            .enumerate()
            .map(|(i, &(id, name, temp))| CoilEntry {
                block_id: id.to_string(),
                display_name: name.to_string(),
                temperature: temp,
                tier: i as i32,
            })
            .collect();
        Self::new(entries)
    }
}

fn validate_entry(entry: &CoilEntry) -> bool {
    !entry.block_id.is_empty()
        && !entry.display_name.is_empty()
        && entry.temperature > 0
        && entry.tier >= 0
}
