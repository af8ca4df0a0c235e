//! Station registry for the seven SURFRAD monitoring sites.
//!
//! A fixed bidirectional mapping between 3-character station codes and the
//! canonical human-readable names. Lookups are case-sensitive exact matches
//! with no normalization, so `"BON"` and `"bondville"` are both unknown.

/// Canonical station names.
pub mod names {
    pub const BONDVILLE: &str = "Bondville";
    pub const FORT_PECK: &str = "Fort Peck";
    pub const GOODWIN_CREEK: &str = "Goodwin Creek";
    pub const TABLE_MOUNTAIN: &str = "Table Mountain";
    pub const DESERT_ROCK: &str = "Desert Rock";
    pub const PENN_STATE: &str = "Penn State";
    pub const SIOUX_FALLS: &str = "Sioux Falls";
}

/// Lowercase 3-character station codes.
pub mod codes {
    pub const BONDVILLE: &str = "bon";
    pub const FORT_PECK: &str = "fpk";
    pub const GOODWIN_CREEK: &str = "gwn";
    pub const TABLE_MOUNTAIN: &str = "tbl";
    pub const DESERT_ROCK: &str = "dra";
    pub const PENN_STATE: &str = "psu";
    pub const SIOUX_FALLS: &str = "sxf";
}

/// Code-to-name table for every SURFRAD site.
pub const STATIONS: &[(&str, &str)] = &[
    (codes::BONDVILLE, names::BONDVILLE),
    (codes::FORT_PECK, names::FORT_PECK),
    (codes::GOODWIN_CREEK, names::GOODWIN_CREEK),
    (codes::TABLE_MOUNTAIN, names::TABLE_MOUNTAIN),
    (codes::DESERT_ROCK, names::DESERT_ROCK),
    (codes::PENN_STATE, names::PENN_STATE),
    (codes::SIOUX_FALLS, names::SIOUX_FALLS),
];

/// Get the canonical station name for a 3-character code.
pub fn name_for_code(code: &str) -> Option<&'static str> {
    STATIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Get the 3-character code for a canonical station name.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    STATIONS
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}

/// Check whether a code identifies a SURFRAD site.
pub fn is_valid_code(code: &str) -> bool {
    name_for_code(code).is_some()
}

/// Check whether a name is one of the canonical SURFRAD station names.
pub fn is_valid_name(name: &str) -> bool {
    code_for_name(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_name_round_trip() {
        for (code, name) in STATIONS {
            assert_eq!(name_for_code(code), Some(*name));
            assert_eq!(code_for_name(name), Some(*code));
        }
    }

    #[test]
    fn test_valid_codes() {
        assert!(is_valid_code(codes::BONDVILLE));
        assert!(is_valid_code(codes::FORT_PECK));
        assert!(!is_valid_code("xyz"));
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name(names::BONDVILLE));
        assert!(is_valid_name(names::FORT_PECK));
        assert!(!is_valid_name("Nowhere, Narnia"));
    }

    #[test]
    fn test_unknown_lookups_report_not_found() {
        assert_eq!(name_for_code("xyz"), None);
        assert_eq!(code_for_name("Atlantis"), None);
        // Exact match only; case variants are rejected
        assert_eq!(name_for_code("BON"), None);
        assert_eq!(code_for_name("bondville"), None);
    }
}
