use crate::constants::EXPECTED_COMPANY_DATASET_FIELDS;
use crate::types::RawCompanyRow;
use crate::{Company, Error};
use log::{debug, warn};
use serde::Deserialize;

/// The raw columnar dataset: a schema descriptor plus positional rows.
///
/// The `fields` descriptor is informational only. Rows are always mapped positionally
/// as `[cik, name, ticker, exchange]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompanyDataset {
    #[serde(default)]
    pub fields: Vec<String>,
    pub data: Vec<RawCompanyRow>,
}

impl CompanyDataset {
    pub fn has_expected_fields(&self) -> bool {
        self.fields
            .iter()
            .map(String::as_str)
            .eq(EXPECTED_COMPANY_DATASET_FIELDS.iter().copied())
    }

    /// Projects every row into a `Company`, preserving row order.
    ///
    /// Fails on the first row that does not fit the expected shape.
    pub fn into_companies(self) -> Result<Vec<Company>, Error> {
        if !self.has_expected_fields() {
            warn!(
                "Unexpected dataset fields {:?}; mapping rows positionally as {:?}",
                self.fields, EXPECTED_COMPANY_DATASET_FIELDS
            );
        }

        let companies = self
            .data
            .iter()
            .enumerate()
            .map(|(row_index, row)| Company::try_from_row(row_index, row))
            .collect::<Result<Vec<Company>, Error>>()?;

        debug!("Loaded {} companies from dataset", companies.len());

        Ok(companies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset_with_rows(data: Vec<RawCompanyRow>) -> CompanyDataset {
        CompanyDataset {
            fields: EXPECTED_COMPANY_DATASET_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect(),
            data,
        }
    }

    #[test]
    fn test_preserves_row_order() {
        let dataset = dataset_with_rows(vec![
            vec![json!(789019), json!("MICROSOFT CORP"), json!("MSFT"), json!("Nasdaq")],
            vec![json!(320193), json!("Apple Inc."), json!("AAPL"), json!("Nasdaq")],
        ]);

        let ciks: Vec<u64> = dataset
            .into_companies()
            .unwrap()
            .iter()
            .map(|company| company.cik)
            .collect();

        assert_eq!(ciks, vec![789019, 320193]);
    }

    #[test]
    fn test_keeps_duplicate_ciks() {
        let dataset = dataset_with_rows(vec![
            vec![json!(1652044), json!("Alphabet Inc."), json!("GOOGL"), json!("Nasdaq")],
            vec![json!(1652044), json!("Alphabet Inc."), json!("GOOG"), json!("Nasdaq")],
        ]);

        assert_eq!(dataset.into_companies().unwrap().len(), 2);
    }

    #[test]
    fn test_reports_first_malformed_row() {
        let dataset = dataset_with_rows(vec![
            vec![json!(320193), json!("Apple Inc."), json!("AAPL"), json!("Nasdaq")],
            vec![json!(789019), json!("MICROSOFT CORP")],
            vec![json!("bad"), json!("Bad Row"), json!("BAD"), json!("Nasdaq")],
        ]);

        assert!(matches!(
            dataset.into_companies(),
            Err(Error::RowError(1, _))
        ));
    }

    #[test]
    fn test_unexpected_fields_still_load_positionally() {
        let dataset = CompanyDataset {
            fields: vec!["id".to_string(), "title".to_string()],
            data: vec![vec![
                json!(320193),
                json!("Apple Inc."),
                json!("AAPL"),
                json!("Nasdaq"),
            ]],
        };

        assert!(!dataset.has_expected_fields());

        let companies = dataset.into_companies().unwrap();
        assert_eq!(companies[0].name, "Apple Inc.");
    }

    #[test]
    fn test_empty_dataset() {
        assert!(dataset_with_rows(vec![]).into_companies().unwrap().is_empty());
    }
}
