mod config;
pub use config::DEFAULT_FUZZY_SEARCH_CONFIG;
mod constants;
pub use constants::DEFAULT_SEARCH_LIMIT;
pub mod models;
pub use models::{
    BitapMatch, BitapSearcher, Company, CompanyDataset, CompanyDatasetPreprocessor,
    CompanyRepository, CompanySearchField, Error, FuzzySearchConfig, SearchIndex, SearchKey,
    SearchResult,
};
pub mod types;
mod utils;
pub use types::{Cik, CompanyName, ExchangeName, SearchScore, TickerSymbol};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Fuzzy-searches companies by name and ticker, returning at most `DEFAULT_SEARCH_LIMIT`
/// results, best match first.
pub fn search<'a>(company_repository: &'a CompanyRepository, query: &str) -> Vec<&'a Company> {
    company_repository.search(query)
}

pub fn search_with_limit<'a>(
    company_repository: &'a CompanyRepository,
    query: &str,
    limit: usize,
) -> Vec<&'a Company> {
    company_repository.search_with_limit(query, limit)
}
