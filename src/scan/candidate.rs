//! Candidate predicate for flood-fill participation

use crate::config::coils::CoilTable;
use crate::config::scan::ScanConfig;
use crate::world::BlockSnapshot;

/// Decides whether a cell participates in structure discovery.
///
/// A cell is a candidate when it is solid and either belongs to the
/// allowed namespace or is a configured coil block (coils from other
/// namespaces still count as structure).
pub struct CandidateFilter<'a> {
    allowed_namespace: &'a str,
    coils: &'a CoilTable,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(config: &'a ScanConfig, coils: &'a CoilTable) -> Self {
        Self {
            allowed_namespace: &config.allowed_namespace,
            coils,
        }
    }

    /// Pure predicate; no side effects
    pub fn is_candidate(&self, snapshot: &BlockSnapshot) -> bool {
        if snapshot.is_air {
            return false;
        }
        if snapshot.namespace() == self.allowed_namespace {
            return true;
        }
        self.coils.coil_tier(snapshot) >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::coils::CoilEntry;

    fn filter_parts() -> (ScanConfig, CoilTable) {
        let config = ScanConfig::default();
        let coils = CoilTable::new(vec![CoilEntry {
            block_id: "othermod:superconductor_coil_block".to_string(),
            display_name: "Superconductor Coil".to_string(),
            temperature: 5000,
            tier: 0,
        }]);
        (config, coils)
    }

    #[test]
    fn test_air_is_never_candidate() {
        let (config, coils) = filter_parts();
        let filter = CandidateFilter::new(&config, &coils);
        assert!(!filter.is_candidate(&BlockSnapshot::air()));
    }

    #[test]
    fn test_namespace_match() {
        let (config, coils) = filter_parts();
        let filter = CandidateFilter::new(&config, &coils);
        assert!(filter.is_candidate(&BlockSnapshot::new("gtceu:heatproof_casing")));
        assert!(!filter.is_candidate(&BlockSnapshot::new("minecraft:stone")));
    }

    #[test]
    fn test_foreign_coil_is_candidate() {
        let (config, coils) = filter_parts();
        let filter = CandidateFilter::new(&config, &coils);
        assert!(filter.is_candidate(&BlockSnapshot::new("othermod:superconductor_coil_block")));
        assert!(!filter.is_candidate(&BlockSnapshot::new("othermod:decorative_block")));
    }
}
