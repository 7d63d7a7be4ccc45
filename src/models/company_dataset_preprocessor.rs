use crate::{CompanyDataset, Error};
use flate2::read::GzDecoder;
use std::io::Read;

pub struct CompanyDatasetPreprocessor {}

impl CompanyDatasetPreprocessor {
    pub fn read_company_dataset_from_string(json: &str) -> Result<CompanyDataset, Error> {
        serde_json::from_str(json)
            .map_err(|e| Error::ParserError(format!("Failed to read company dataset: {}", e)))
    }

    /// Decompress and parse the company dataset from Gzip bytes
    pub fn extract_company_dataset_from_bytes(read_bytes: &[u8]) -> Result<CompanyDataset, Error> {
        // Decompress the Gzip file
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        let company_dataset = Self::read_company_dataset_from_string(&decompressed_data)?;
        Ok(company_dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const DATASET_JSON: &str = r#"{
        "fields": ["cik", "name", "ticker", "exchange"],
        "data": [[320193, "Apple Inc.", "AAPL", "NASDAQ"]]
    }"#;

    #[test]
    fn test_reads_dataset_from_string() {
        let dataset =
            CompanyDatasetPreprocessor::read_company_dataset_from_string(DATASET_JSON).unwrap();

        assert!(dataset.has_expected_fields());
        assert_eq!(dataset.data.len(), 1);
    }

    #[test]
    fn test_missing_fields_descriptor_is_tolerated() {
        let dataset = CompanyDatasetPreprocessor::read_company_dataset_from_string(
            r#"{"data": [[320193, "Apple Inc.", "AAPL", "NASDAQ"]]}"#,
        )
        .unwrap();

        assert!(dataset.fields.is_empty());
        assert_eq!(dataset.data.len(), 1);
    }

    #[test]
    fn test_rejects_invalid_json() {
        let result = CompanyDatasetPreprocessor::read_company_dataset_from_string("{\"data\": 5}");

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_extracts_dataset_from_gzip_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(DATASET_JSON.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let dataset =
            CompanyDatasetPreprocessor::extract_company_dataset_from_bytes(&compressed).unwrap();

        assert_eq!(dataset.data[0][1], "Apple Inc.");
    }

    #[test]
    fn test_rejects_bytes_that_are_not_gzip() {
        let result =
            CompanyDatasetPreprocessor::extract_company_dataset_from_bytes(DATASET_JSON.as_bytes());

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
