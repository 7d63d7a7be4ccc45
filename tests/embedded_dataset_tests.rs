#![cfg(feature = "embed-bytes")]

use company_search::{CompanyRepository, DEFAULT_FUZZY_SEARCH_CONFIG};

#[cfg(test)]
mod tests {
    use super::*;

    fn load_embedded() -> CompanyRepository {
        let _ = env_logger::builder().is_test(true).try_init();

        CompanyRepository::from_embedded_dataset().expect("Failed to load embedded dataset")
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let company_repository = load_embedded();

        assert!(!company_repository.is_empty());
        assert_eq!(company_repository.config(), DEFAULT_FUZZY_SEARCH_CONFIG);
        assert!(company_repository
            .companies()
            .iter()
            .any(|company| company.cik == 320193 && company.ticker == "AAPL"));
    }

    #[test]
    fn test_embedded_dataset_dropped_character() {
        let company_repository = load_embedded();

        let results = company_repository.search("Aple");

        assert_eq!(results[0].cik, 320193);
    }

    #[test]
    fn test_embedded_dataset_exact_ticker() {
        let company_repository = load_embedded();

        let results = company_repository.search_with_limit("NVDA", 1);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "NVIDIA CORP");
    }

    #[test]
    fn test_embedded_dataset_share_classes_both_match() {
        let company_repository = load_embedded();

        let tickers: Vec<&str> = company_repository
            .search_with_limit("Alphabet", 2)
            .iter()
            .map(|company| company.ticker.as_str())
            .collect();

        assert_eq!(tickers, vec!["GOOGL", "GOOG"]);
    }
}
