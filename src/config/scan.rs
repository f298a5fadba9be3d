//! Scan parameters

use serde::{Deserialize, Serialize};

/// Parameters bounding one discovery scan.
///
/// `max_scan_xz` / `max_scan_y` cap the flood-fill volume per
/// structure, which caps worst-case scan latency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Namespace whose blocks participate in structure discovery
    pub allowed_namespace: String,
    /// Outward padding applied to the anchor bounding box
    pub bounds_padding: i32,
    /// Maximum X and Z span of one structure's search box
    pub max_scan_xz: i32,
    /// Maximum Y span of one structure's search box
    pub max_scan_y: i32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            allowed_namespace: "gtceu".to_string(),
            bounds_padding: 2,
            max_scan_xz: 48,
            max_scan_y: 48,
        }
    }
}
