use crate::config::DEFAULT_FUZZY_SEARCH_CONFIG;

/// Tuning knobs for the Bitap matcher and the per-record score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzySearchConfig {
    pub is_case_sensitive: bool,
    /// Scores above this are not considered a match. `0.0` requires a perfect match.
    pub threshold: f64,
    /// Character position in the value where the query is expected to appear.
    pub location: usize,
    /// How far from `location` a match may drift before it is penalized by a full point.
    pub distance: usize,
    pub ignore_location: bool,
    pub find_all_matches: bool,
    /// When set, shorter values are not favoured over longer ones.
    pub ignore_field_norm: bool,
    pub field_norm_weight: f64,
}

impl Default for FuzzySearchConfig {
    fn default() -> Self {
        *DEFAULT_FUZZY_SEARCH_CONFIG
    }
}
