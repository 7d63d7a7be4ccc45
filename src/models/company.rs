use crate::types::{Cik, CompanyName, ExchangeName, RowIndex, TickerSymbol};
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single listed company, projected from one row of the raw dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    pub cik: Cik,
    pub name: CompanyName,
    /// May be empty when the source row has no ticker.
    pub ticker: TickerSymbol,
    pub exchange: ExchangeName,
}

impl Company {
    /// Parses a positional `[cik, name, ticker, exchange]` row.
    ///
    /// `ticker` and `exchange` accept `null`, which is read as an empty string. Anything
    /// else that does not fit its column is reported as an `Error::RowError` carrying
    /// `row_index`.
    pub fn try_from_row(row_index: RowIndex, row: &[Value]) -> Result<Self, Error> {
        let [cik, name, ticker, exchange] = row else {
            return Err(Error::RowError(
                row_index,
                format!("Expected 4 values but found {}", row.len()),
            ));
        };

        let cik = cik.as_u64().ok_or_else(|| {
            Error::RowError(row_index, format!("Invalid 'cik' value: {}", cik))
        })?;

        let name = name
            .as_str()
            .ok_or_else(|| Error::RowError(row_index, format!("Invalid 'name' value: {}", name)))?
            .to_string();

        Ok(Company {
            cik,
            name,
            ticker: Self::nullable_string(row_index, "ticker", ticker)?,
            exchange: Self::nullable_string(row_index, "exchange", exchange)?,
        })
    }

    fn nullable_string(row_index: RowIndex, field: &str, value: &Value) -> Result<String, Error> {
        match value {
            Value::String(value) => Ok(value.clone()),
            Value::Null => Ok(String::new()),
            other => Err(Error::RowError(
                row_index,
                format!("Invalid '{}' value: {}", field, other),
            )),
        }
    }
}
