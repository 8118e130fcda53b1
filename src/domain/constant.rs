//! Market identifiers and bar granularities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// Shanghai Stock Exchange
    #[serde(rename = "SSE")]
    Sse,
    /// Shenzhen Stock Exchange
    #[serde(rename = "SZSE")]
    Szse,
    /// Beijing Stock Exchange
    #[serde(rename = "BSE")]
    Bse,
    #[serde(rename = "CFFEX")]
    Cffex,
    #[serde(rename = "SHFE")]
    Shfe,
    #[serde(rename = "CZCE")]
    Czce,
    #[serde(rename = "DCE")]
    Dce,
    #[serde(rename = "INE")]
    Ine,
    #[serde(rename = "GFEX")]
    Gfex,
    #[serde(rename = "SGE")]
    Sge,
    #[serde(rename = "HKEX")]
    Hkex,
    #[serde(rename = "NYSE")]
    Nyse,
    #[serde(rename = "NASDAQ")]
    Nasdaq,
    #[serde(rename = "SMART")]
    Smart,
    #[serde(rename = "LOCAL")]
    Local,
}

impl Exchange {
    pub const ALL: [Exchange; 15] = [
        Exchange::Sse,
        Exchange::Szse,
        Exchange::Bse,
        Exchange::Cffex,
        Exchange::Shfe,
        Exchange::Czce,
        Exchange::Dce,
        Exchange::Ine,
        Exchange::Gfex,
        Exchange::Sge,
        Exchange::Hkex,
        Exchange::Nyse,
        Exchange::Nasdaq,
        Exchange::Smart,
        Exchange::Local,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Exchange::Sse => "SSE",
            Exchange::Szse => "SZSE",
            Exchange::Bse => "BSE",
            Exchange::Cffex => "CFFEX",
            Exchange::Shfe => "SHFE",
            Exchange::Czce => "CZCE",
            Exchange::Dce => "DCE",
            Exchange::Ine => "INE",
            Exchange::Gfex => "GFEX",
            Exchange::Sge => "SGE",
            Exchange::Hkex => "HKEX",
            Exchange::Nyse => "NYSE",
            Exchange::Nasdaq => "NASDAQ",
            Exchange::Smart => "SMART",
            Exchange::Local => "LOCAL",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseConstantError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Exchange {
    type Err = ParseConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Exchange::ALL
            .iter()
            .copied()
            .find(|e| e.code() == upper)
            .ok_or_else(|| ParseConstantError {
                kind: "exchange",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute,
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "d")]
    Daily,
    #[serde(rename = "w")]
    Weekly,
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "tick")]
    Tick,
}

impl Interval {
    pub const ALL: [Interval; 6] = [
        Interval::Minute,
        Interval::Hour,
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
        Interval::Tick,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Interval::Minute => "1m",
            Interval::Hour => "1h",
            Interval::Daily => "d",
            Interval::Weekly => "w",
            Interval::Monthly => "M",
            Interval::Tick => "tick",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Interval {
    type Err = ParseConstantError;

    /// Codes are case-sensitive (`M` is monthly); long names are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(i) = Interval::ALL.iter().copied().find(|i| i.code() == s) {
            return Ok(i);
        }
        match s.to_lowercase().as_str() {
            "minute" => Ok(Interval::Minute),
            "hour" => Ok(Interval::Hour),
            "daily" => Ok(Interval::Daily),
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            _ => Err(ParseConstantError {
                kind: "interval",
                value: s.to_string(),
            }),
        }
    }
}
