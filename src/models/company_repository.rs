use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::types::SearchScore;
use crate::{
    Company, CompanyDataset, CompanyDatasetPreprocessor, Error, FuzzySearchConfig, SearchIndex,
    DEFAULT_FUZZY_SEARCH_CONFIG,
};
use log::trace;

/// An immutable company list together with the fuzzy-search index built over it.
///
/// Build it once at startup and share it by reference (or behind an `Arc`); every query
/// method takes `&self`.
pub struct CompanyRepository {
    companies: Vec<Company>,
    search_index: SearchIndex,
}

impl CompanyRepository {
    pub fn new(companies: Vec<Company>) -> Self {
        Self::with_config(companies, DEFAULT_FUZZY_SEARCH_CONFIG)
    }

    pub fn with_config(companies: Vec<Company>, config: &FuzzySearchConfig) -> Self {
        let search_index = SearchIndex::new(&companies, config);

        CompanyRepository {
            companies,
            search_index,
        }
    }

    pub fn from_dataset(company_dataset: CompanyDataset) -> Result<Self, Error> {
        let companies = company_dataset.into_companies()?;

        Ok(Self::new(companies))
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let company_dataset = CompanyDatasetPreprocessor::read_company_dataset_from_string(json)?;

        Self::from_dataset(company_dataset)
    }

    pub fn from_gzip_bytes(read_bytes: &[u8]) -> Result<Self, Error> {
        let company_dataset =
            CompanyDatasetPreprocessor::extract_company_dataset_from_bytes(read_bytes)?;

        Self::from_dataset(company_dataset)
    }

    /// Loads the dataset bundled into the crate at build time.
    #[cfg(feature = "embed-bytes")]
    pub fn from_embedded_dataset() -> Result<Self, Error> {
        Self::from_gzip_bytes(crate::constants::COMPRESSED_COMPANY_DATASET_BYTES)
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn config(&self) -> &FuzzySearchConfig {
        self.search_index.config()
    }

    /// Returns up to `DEFAULT_SEARCH_LIMIT` companies matching `query`, best match first.
    pub fn search(&self, query: &str) -> Vec<&Company> {
        self.search_with_limit(query, DEFAULT_SEARCH_LIMIT)
    }

    /// Returns up to `limit` companies matching `query` by name or ticker, best match first.
    ///
    /// An empty query returns no results. The query is otherwise used as-is.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&Company> {
        self.search_with_scores(query, limit)
            .into_iter()
            .map(|(company, _score)| company)
            .collect()
    }

    /// Like `search_with_limit`, but keeps each match score (lower is better).
    pub fn search_with_scores(&self, query: &str, limit: usize) -> Vec<(&Company, SearchScore)> {
        if query.is_empty() {
            return Vec::new();
        }

        let results = self.search_index.search(query, limit);

        trace!("Query {:?} matched {} companies", query, results.len());

        results
            .into_iter()
            .filter_map(|result| {
                self.companies
                    .get(result.record_index)
                    .map(|company| (company, result.score))
            })
            .collect()
    }
}
