use crate::models::CompanySearchField;

/// Maximum number of companies returned by a search when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

pub const EXPECTED_COMPANY_DATASET_FIELDS: &[&str] = &["cik", "name", "ticker", "exchange"];

/// Fields the search index matches against, in key order.
pub const SEARCHABLE_COMPANY_FIELDS: &[CompanySearchField] =
    &[CompanySearchField::Name, CompanySearchField::Ticker];

/// Longest pattern (in chars) a single Bitap pass can handle.
pub const MAX_PATTERN_BITS: usize = 32;

/// Floor applied to every Bitap score.
pub const MIN_BITAP_SCORE: f64 = 0.001;

/// Field norms are rounded to three decimals.
pub const FIELD_NORM_PRECISION: f64 = 1000.0;

#[cfg(feature = "embed-bytes")]
pub const COMPRESSED_COMPANY_DATASET_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/companies.json.gz"));
