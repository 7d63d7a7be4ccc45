use crate::models::FuzzySearchConfig;

pub const DEFAULT_FUZZY_SEARCH_CONFIG: &FuzzySearchConfig = &FuzzySearchConfig {
    is_case_sensitive: false,
    threshold: 0.6,
    location: 0,
    distance: 100,
    ignore_location: false,
    find_all_matches: false,
    ignore_field_norm: false,
    field_norm_weight: 1.0,
};
