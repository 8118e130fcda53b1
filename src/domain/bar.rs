//! Bar and tick records produced by the datafeed.

use crate::domain::constant::{Exchange, Interval};
use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

/// Source tag stamped on every bar this datafeed produces.
pub const GATEWAY_NAME: &str = "RQ";

/// Price precision applied to open/high/low/close.
pub const PRICE_TICK: f64 = 0.000001;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarData {
    pub symbol: String,
    pub exchange: Exchange,
    pub interval: Option<Interval>,
    pub datetime: NaiveDateTime,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: f64,
    pub turnover: f64,
    pub open_interest: f64,
    pub gateway_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickData {
    pub symbol: String,
    pub exchange: Exchange,
    pub datetime: NaiveDateTime,
    pub last_price: f64,
    pub volume: f64,
    pub turnover: f64,
    pub open_interest: f64,
    pub bid_price_1: f64,
    pub ask_price_1: f64,
    pub bid_volume_1: f64,
    pub ask_volume_1: f64,
    pub gateway_name: String,
}

/// Round `value` to the nearest multiple of `target`.
///
/// Both operands are taken at their shortest decimal form and ties go to
/// the even multiple, so `round_to(10.1234565, 1e-6)` is `10.123456`.
/// Values outside the decimal range are returned unchanged.
pub fn round_to(value: f64, target: f64) -> f64 {
    if target <= 0.0 || !value.is_finite() {
        return value;
    }
    let (Ok(v), Ok(t)) = (
        Decimal::from_str(&value.to_string()),
        Decimal::from_str(&target.to_string()),
    ) else {
        return value;
    };
    v.checked_div(t)
        .map(|q| q.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
        .and_then(|q| q.checked_mul(t))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
