//! Technology tier name table

/// Tier name tokens in ascending tech order. Index = tier number.
pub const TIER_NAMES: [&str; 15] = [
    "ulv", "lv", "mv", "hv", "ev", "iv", "luv", "zpm", "uv", "uhv", "uev", "uiv", "uxv", "opv",
    "max",
];

/// Tier number of the first tier token contained in `identifier`
/// (scanned lowest tier first), or -1 if no token matches.
///
/// This is a string heuristic, not authoritative metadata: an
/// identifier with no recognizable token is tier -1 ("unknown"),
/// which downstream logic treats as non-upgradeable.
pub fn tier_from_identifier(identifier: &str) -> i32 {
    let lower = identifier.to_ascii_lowercase();
    for (i, name) in TIER_NAMES.iter().enumerate() {
        if lower.contains(name) {
            return i as i32;
        }
    }
    -1
}

/// Canonical token for a tier number, if it has one
pub fn tier_name(tier: i32) -> Option<&'static str> {
    usize::try_from(tier).ok().and_then(|i| TIER_NAMES.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_identifier() {
        assert_eq!(tier_from_identifier("lv_input_hatch"), 1);
        assert_eq!(tier_from_identifier("zpm_energy_input_hatch"), 7);
        assert_eq!(tier_from_identifier("heatproof_casing"), -1);
    }

    #[test]
    fn test_first_match_wins() {
        // Ambiguous identifiers resolve to the lowest matching tier:
        // "ulv" is scanned before "lv", and "uhv" contains "hv".
        assert_eq!(tier_from_identifier("ulv_input_bus"), 0);
        assert_eq!(tier_from_identifier("uhv_input_bus"), 3);
    }

    #[test]
    fn test_tier_name() {
        assert_eq!(tier_name(1), Some("lv"));
        assert_eq!(tier_name(-1), None);
        assert_eq!(tier_name(99), None);
    }
}
