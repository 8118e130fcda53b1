//! Provider-shaped price tables.
//!
//! A [`PriceTable`] is what an upstream provider hands back: rows in the
//! provider's native order with any numeric cell possibly missing.

use chrono::NaiveDate;
use std::fmt;

/// Price adjustment convention requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustMode {
    None,
    /// Forward-adjusted: corporate actions are backdated onto history.
    Forward,
    Backward,
}

impl AdjustMode {
    /// Provider parameter value.
    pub fn code(&self) -> &'static str {
        match self {
            AdjustMode::None => "",
            AdjustMode::Forward => "qfq",
            AdjustMode::Backward => "hfq",
        }
    }
}

impl fmt::Display for AdjustMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjustMode::None => f.write_str("none"),
            other => f.write_str(other.code()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<f64>,
    pub turnover: Option<f64>,
    pub open_interest: Option<f64>,
}

/// A [`PriceRow`] with every missing numeric replaced by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRow {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub turnover: f64,
    pub open_interest: f64,
}

impl PriceRow {
    pub fn filled(&self) -> FilledRow {
        // NaN cells count as missing too.
        let f = |v: Option<f64>| v.filter(|x| !x.is_nan()).unwrap_or(0.0);
        FilledRow {
            date: self.date,
            open: f(self.open),
            close: f(self.close),
            high: f(self.high),
            low: f(self.low),
            volume: f(self.volume),
            turnover: f(self.turnover),
            open_interest: f(self.open_interest),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceTable {
    pub rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn new(rows: Vec<PriceRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in native order with missing values zero-filled.
    pub fn fill_missing(&self) -> impl Iterator<Item = FilledRow> + '_ {
        self.rows.iter().map(PriceRow::filled)
    }
}
