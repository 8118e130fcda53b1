#![allow(dead_code)]

use barfeed::domain::constant::{Exchange, Interval};
use barfeed::domain::error::DatafeedError;
use barfeed::domain::price_table::{AdjustMode, PriceRow, PriceTable};
use barfeed::domain::request::HistoryRequest;
use barfeed::ports::price_port::PriceTablePort;
use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub symbol: String,
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub adjust: AdjustMode,
}

pub struct MockPricePort {
    pub table: Option<PriceTable>,
    pub error: Option<String>,
    pub calls: RefCell<Vec<FetchCall>>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            table: None,
            error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_rows(mut self, rows: Vec<PriceRow>) -> Self {
        self.table = Some(PriceTable::new(rows));
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PriceTablePort for &MockPricePort {
    fn fetch_price_table(
        &self,
        symbol: &str,
        period: &str,
        start_date: &str,
        end_date: &str,
        adjust: AdjustMode,
    ) -> Result<Option<PriceTable>, DatafeedError> {
        self.calls.borrow_mut().push(FetchCall {
            symbol: symbol.to_string(),
            period: period.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            adjust,
        });
        if let Some(reason) = &self.error {
            return Err(DatafeedError::Provider {
                reason: reason.clone(),
            });
        }
        Ok(self.table.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

pub fn make_row(date_str: &str, close: f64) -> PriceRow {
    PriceRow {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: Some(close - 0.1),
        close: Some(close),
        high: Some(close + 0.2),
        low: Some(close - 0.3),
        volume: Some(10_000.0),
        turnover: Some(close * 10_000.0),
        open_interest: None,
    }
}

/// Consecutive daily rows starting at `start_date`.
pub fn generate_rows(start_date: &str, count: usize, start_price: f64) -> Vec<PriceRow> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    (0..count)
        .map(|i| {
            let day = start + chrono::Duration::days(i as i64);
            make_row(&day.format("%Y-%m-%d").to_string(), start_price + i as f64)
        })
        .collect()
}

pub fn daily_request(exchange: Exchange, start: NaiveDateTime, end: NaiveDateTime) -> HistoryRequest {
    HistoryRequest::new("600000", exchange, Some(Interval::Daily), start, Some(end))
}
