use company_search::{CompanyDataset, CompanyRepository, Error};
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::json;
use std::io::Write;
use test_utils::load_test_company_repository;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loads_every_row_in_order() {
        let company_repository = load_test_company_repository();

        assert_eq!(company_repository.len(), 11);
        assert_eq!(company_repository.companies()[0].cik, 320193);
        assert_eq!(company_repository.companies()[10].cik, 1750);
    }

    #[test]
    fn test_null_ticker_is_loaded_as_empty() {
        let company_repository = load_test_company_repository();

        let aar = company_repository
            .companies()
            .iter()
            .find(|company| company.cik == 1750)
            .expect("AAR Corp missing from fixture");

        assert_eq!(aar.ticker, "");
        assert_eq!(aar.exchange, "NYSE");
    }

    #[test]
    fn test_malformed_row_is_reported_at_load_time() {
        let result = CompanyRepository::from_json_str(
            r#"{
                "fields": ["cik", "name", "ticker", "exchange"],
                "data": [
                    [320193, "Apple Inc.", "AAPL", "NASDAQ"],
                    ["789019", "Microsoft Corp", "MSFT", "NASDAQ"]
                ]
            }"#,
        );

        match result {
            Err(Error::RowError(row_index, _)) => assert_eq!(row_index, 1),
            Err(other) => panic!("Expected a row error, got {}", other),
            Ok(_) => panic!("Expected the malformed row to be rejected"),
        }
    }

    #[test]
    fn test_invalid_json_is_a_parser_error() {
        assert!(matches!(
            CompanyRepository::from_json_str("not json"),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_loads_from_gzip_bytes() {
        let json = json!({
            "fields": ["cik", "name", "ticker", "exchange"],
            "data": [[320193, "Apple Inc.", "AAPL", "NASDAQ"]]
        })
        .to_string();

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(json.as_bytes())
            .expect("Failed to compress dataset");
        let compressed = encoder.finish().expect("Failed to finalize compression");

        let company_repository =
            CompanyRepository::from_gzip_bytes(&compressed).expect("Failed to load dataset");

        assert_eq!(company_repository.len(), 1);
        assert_eq!(company_repository.search("Aple")[0].cik, 320193);
    }

    #[test]
    fn test_from_dataset() {
        let company_dataset = CompanyDataset {
            fields: vec![],
            data: vec![vec![json!(1318605), json!("Tesla, Inc."), json!("TSLA"), json!(null)]],
        };

        let company_repository =
            CompanyRepository::from_dataset(company_dataset).expect("Failed to load dataset");

        assert_eq!(company_repository.companies()[0].exchange, "");
    }

    #[test]
    fn test_empty_dataset_never_matches() {
        let company_repository = CompanyRepository::new(vec![]);

        assert!(company_repository.is_empty());
        assert!(company_repository.search("Apple").is_empty());
    }
}
