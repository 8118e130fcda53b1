//! History query request.

use crate::domain::constant::{Exchange, Interval};
use chrono::NaiveDateTime;

/// A request for historical data. Timestamps are naive exchange-local time.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRequest {
    pub symbol: String,
    pub exchange: Exchange,
    pub interval: Option<Interval>,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl HistoryRequest {
    pub fn new(
        symbol: impl Into<String>,
        exchange: Exchange,
        interval: Option<Interval>,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
            interval,
            start,
            end,
        }
    }

    /// `{symbol}.{EXCHANGE}`
    pub fn vt_symbol(&self) -> String {
        format!("{}.{}", self.symbol, self.exchange)
    }

    /// The exclusive end boundary, falling back to `now` when unset.
    pub fn end_or(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.end.unwrap_or(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn vt_symbol_joins_symbol_and_exchange() {
        let req = HistoryRequest::new("600000", Exchange::Sse, None, at(2024, 1, 1), None);
        assert_eq!(req.vt_symbol(), "600000.SSE");
    }

    #[test]
    fn end_or_prefers_explicit_end() {
        let req = HistoryRequest::new(
            "000001",
            Exchange::Szse,
            Some(Interval::Daily),
            at(2024, 1, 1),
            Some(at(2024, 1, 10)),
        );
        assert_eq!(req.end_or(at(2030, 1, 1)), at(2024, 1, 10));
    }

    #[test]
    fn end_or_falls_back_when_unset() {
        let req = HistoryRequest::new("000001", Exchange::Szse, None, at(2024, 1, 1), None);
        assert_eq!(req.end_or(at(2030, 1, 1)), at(2030, 1, 1));
    }
}
