use crate::constants::SEARCHABLE_COMPANY_FIELDS;
use crate::types::{RecordIndex, SearchScore};
use crate::utils::{compute_field_norm, sort_results};
use crate::{BitapSearcher, Company, FuzzySearchConfig, SearchKey};
use log::debug;

/// A ranked hit, pointing back into the company list the index was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub record_index: RecordIndex,
    pub score: SearchScore,
}

struct IndexedField {
    key_index: usize,
    value: String,
    norm: f64,
}

struct IndexedRecord {
    record_index: RecordIndex,
    fields: Vec<IndexedField>,
}

/// Fuzzy-search index over the `name` and `ticker` of a fixed company list.
///
/// Built once; searching never mutates it.
pub struct SearchIndex {
    config: FuzzySearchConfig,
    keys: Vec<SearchKey>,
    records: Vec<IndexedRecord>,
}

impl SearchIndex {
    pub fn new(companies: &[Company], config: &FuzzySearchConfig) -> Self {
        let keys = SearchKey::equally_weighted(SEARCHABLE_COMPANY_FIELDS);

        let records: Vec<IndexedRecord> = companies
            .iter()
            .enumerate()
            .filter_map(|(record_index, company)| {
                let fields: Vec<IndexedField> = keys
                    .iter()
                    .enumerate()
                    .filter_map(|(key_index, key)| {
                        let value = key.field.value(company);

                        // Blank values can never match, so they are not indexed
                        if value.trim().is_empty() {
                            return None;
                        }

                        Some(IndexedField {
                            key_index,
                            value: value.to_string(),
                            norm: compute_field_norm(value, config.field_norm_weight),
                        })
                    })
                    .collect();

                if fields.is_empty() {
                    None
                } else {
                    Some(IndexedRecord {
                        record_index,
                        fields,
                    })
                }
            })
            .collect();

        debug!(
            "Built search index over {} of {} companies",
            records.len(),
            companies.len()
        );

        SearchIndex {
            config: *config,
            keys,
            records,
        }
    }

    pub fn config(&self) -> &FuzzySearchConfig {
        &self.config
    }

    pub fn keys(&self) -> &[SearchKey] {
        &self.keys
    }

    /// Number of companies with at least one searchable value.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns up to `limit` hits, best match first.
    ///
    /// A record's score is the product of `score^(key_weight * field_norm)` over every key
    /// that matched; records where no key matched are left out.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let searcher = BitapSearcher::new(query, &self.config);

        let mut results: Vec<SearchResult> = self
            .records
            .iter()
            .filter_map(|record| self.score_record(&searcher, record))
            .collect();

        sort_results(&mut results);
        results.truncate(limit);

        results
    }

    fn score_record(&self, searcher: &BitapSearcher, record: &IndexedRecord) -> Option<SearchResult> {
        let mut total_score: SearchScore = 1.0;
        let mut has_match = false;

        for field in &record.fields {
            let bitap_match = searcher.search_in(&field.value);

            if !bitap_match.is_match {
                continue;
            }

            has_match = true;

            let weight = self.keys[field.key_index].weight;
            let norm = if self.config.ignore_field_norm {
                1.0
            } else {
                field.norm
            };

            // A perfect score would zero out the product regardless of the other keys
            let score = if bitap_match.score == 0.0 && weight > 0.0 {
                f64::EPSILON
            } else {
                bitap_match.score
            };

            total_score *= score.powf(weight * norm);
        }

        has_match.then_some(SearchResult {
            record_index: record.record_index,
            score: total_score,
        })
    }
}
