pub mod error;
pub use error::Error;

pub mod company;
pub use company::Company;

pub mod company_dataset;
pub use company_dataset::CompanyDataset;

pub mod company_dataset_preprocessor;
pub use company_dataset_preprocessor::CompanyDatasetPreprocessor;

pub mod fuzzy_search_config;
pub use fuzzy_search_config::FuzzySearchConfig;

pub mod bitap_searcher;
pub use bitap_searcher::{BitapMatch, BitapSearcher};

pub mod search_key;
pub use search_key::{CompanySearchField, SearchKey};

pub mod search_index;
pub use search_index::{SearchIndex, SearchResult};

pub mod company_repository;
pub use company_repository::CompanyRepository;
