// Types listed here are either shared across multiple files and/or exposed via the library.

/// The SEC Central Index Key identifying a company. Treated as opaque.
pub type Cik = u64;

/// Represents the name of a company as an owned `String`.
pub type CompanyName = String;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the exchange a ticker symbol is listed on (e.g., `NYSE`).
pub type ExchangeName = String;

/// A single positional row of the raw dataset: `[cik, name, ticker, exchange]`.
pub type RawCompanyRow = Vec<serde_json::Value>;

/// Position of a row within the raw dataset.
pub type RowIndex = usize;

/// Position of a company within the loaded company list.
pub type RecordIndex = usize;

/// Fuzzy match score, where `0.0` is a perfect match and `1.0` is a complete mismatch.
pub type SearchScore = f64;

/// Bit mask used by the Bitap matcher. Patterns are processed in chunks no longer than its width.
pub type PatternMask = u32;
