use crate::Company;

/// A `Company` field the search index can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanySearchField {
    Name,
    Ticker,
}

impl CompanySearchField {
    pub fn value<'a>(&self, company: &'a Company) -> &'a str {
        match self {
            CompanySearchField::Name => &company.name,
            CompanySearchField::Ticker => &company.ticker,
        }
    }
}

/// A searchable field together with its share of the record score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchKey {
    pub field: CompanySearchField,
    pub weight: f64,
}

impl SearchKey {
    /// Builds equally weighted keys whose weights sum to one.
    pub fn equally_weighted(fields: &[CompanySearchField]) -> Vec<SearchKey> {
        let weight = 1.0 / fields.len().max(1) as f64;

        fields
            .iter()
            .map(|&field| SearchKey { field, weight })
            .collect()
    }
}
