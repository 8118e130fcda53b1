//! CSV file price table adapter.
//!
//! Tables live at `{base}/{symbol}_{period}.csv`. Headers may use either
//! English names or the provider's native column names.

use crate::domain::error::DatafeedError;
use crate::domain::price_table::{AdjustMode, PriceRow, PriceTable};
use crate::ports::price_port::PriceTablePort;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "日期")]
    date: NaiveDate,
    #[serde(default, alias = "开盘")]
    open: Option<f64>,
    #[serde(default, alias = "收盘")]
    close: Option<f64>,
    #[serde(default, alias = "最高")]
    high: Option<f64>,
    #[serde(default, alias = "最低")]
    low: Option<f64>,
    #[serde(default, alias = "成交量")]
    volume: Option<f64>,
    #[serde(default, alias = "成交额", alias = "total_turnover")]
    turnover: Option<f64>,
    #[serde(default, alias = "持仓量")]
    open_interest: Option<f64>,
}

impl From<CsvRow> for PriceRow {
    fn from(r: CsvRow) -> Self {
        PriceRow {
            date: r.date,
            open: r.open,
            close: r.close,
            high: r.high,
            low: r.low,
            volume: r.volume,
            turnover: r.turnover,
            open_interest: r.open_interest,
        }
    }
}

pub struct CsvPriceAdapter {
    base_path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str, period: &str) -> PathBuf {
        self.base_path.join(format!("{}_{}.csv", symbol, period))
    }

    fn parse_compact_date(value: &str, field: &str) -> Result<NaiveDate, DatafeedError> {
        NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|e| DatafeedError::InvalidRequest {
            reason: format!("invalid {} {:?}: {}", field, value, e),
        })
    }
}

impl PriceTablePort for CsvPriceAdapter {
    fn fetch_price_table(
        &self,
        symbol: &str,
        period: &str,
        start_date: &str,
        end_date: &str,
        adjust: AdjustMode,
    ) -> Result<Option<PriceTable>, DatafeedError> {
        let start = Self::parse_compact_date(start_date, "start_date")?;
        let end = Self::parse_compact_date(end_date, "end_date")?;

        let path = self.csv_path(symbol, period);
        log::debug!("reading {} (adjust={})", path.display(), adjust);

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no price table at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(DatafeedError::Provider {
                    reason: format!("failed to read {}: {}", path.display(), e),
                })
            }
        };

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut rows = Vec::new();

        for result in rdr.deserialize::<CsvRow>() {
            let record = result.map_err(|e| DatafeedError::Provider {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            if record.date < start || record.date > end {
                continue;
            }
            rows.push(PriceRow::from(record));
        }

        Ok(Some(PriceTable::new(rows)))
    }
}
