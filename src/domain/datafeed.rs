//! Bar history datafeed for Shanghai and Shenzhen listed instruments.
//!
//! Requests are checked against the supported exchanges and the configured
//! [`IntervalTable`], forwarded to a [`PriceTablePort`] as a forward-adjusted
//! query, and the returned rows are mapped to [`BarData`] until the first row
//! at or past the request's end boundary.

use crate::domain::bar::{round_to, BarData, TickData, GATEWAY_NAME, PRICE_TICK};
use crate::domain::constant::Exchange;
use crate::domain::datafeed_config::DatafeedConfig;
use crate::domain::error::QueryError;
use crate::domain::price_table::{AdjustMode, PriceTable};
use crate::domain::request::HistoryRequest;
use crate::ports::datafeed_port::DatafeedPort;
use crate::ports::price_port::PriceTablePort;
use crate::ports::sink::MessageSink;
use chrono::{NaiveDateTime, NaiveTime};

pub const SUPPORTED_EXCHANGES: [Exchange; 2] = [Exchange::Sse, Exchange::Szse];

/// Compact date format used for provider queries.
pub const PROVIDER_DATE_FORMAT: &str = "%Y%m%d";

pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub struct AktoolDatafeed<P: PriceTablePort> {
    config: DatafeedConfig,
    provider: P,
    clock: Clock,
    inited: bool,
}

impl<P: PriceTablePort> AktoolDatafeed<P> {
    pub fn new(config: DatafeedConfig, provider: P) -> Self {
        let inited = config.validate().is_ok();
        Self {
            config,
            provider,
            clock: local_now,
            inited,
        }
    }

    /// Replace the clock used to default a missing end boundary.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn is_inited(&self) -> bool {
        self.inited
    }

    fn report(sink: &dyn MessageSink, err: QueryError) {
        let message = err.to_string();
        log::warn!("{message}");
        sink.send(&message);
    }

    fn fetch(
        &self,
        req: &HistoryRequest,
        end: NaiveDateTime,
    ) -> Result<Option<PriceTable>, QueryError> {
        let period = self
            .config
            .intervals
            .resolve(req.interval)
            .ok_or(QueryError::UnsupportedInterval {
                interval: req.interval,
            })?;

        let start_date = req.start.format(PROVIDER_DATE_FORMAT).to_string();
        let end_date = end.format(PROVIDER_DATE_FORMAT).to_string();
        log::debug!(
            "fetching {} period={} {}..{}",
            req.vt_symbol(),
            period,
            start_date,
            end_date
        );

        self.provider
            .fetch_price_table(
                &req.symbol,
                period,
                &start_date,
                &end_date,
                AdjustMode::Forward,
            )
            .map_err(|e| QueryError::ProviderUnavailable {
                reason: e.to_string(),
            })
    }
}

/// Map provider rows to bars, stopping at the first row at or after `end`.
pub fn map_rows(req: &HistoryRequest, table: &PriceTable, end: NaiveDateTime) -> Vec<BarData> {
    let mut bars = Vec::with_capacity(table.len());

    for row in table.fill_missing() {
        let dt = row.date.and_time(NaiveTime::MIN);
        if dt >= end {
            break;
        }

        bars.push(BarData {
            symbol: req.symbol.clone(),
            exchange: req.exchange,
            interval: req.interval,
            datetime: dt,
            open_price: round_to(row.open, PRICE_TICK),
            high_price: round_to(row.high, PRICE_TICK),
            low_price: round_to(row.low, PRICE_TICK),
            close_price: round_to(row.close, PRICE_TICK),
            volume: row.volume,
            turnover: row.turnover,
            open_interest: row.open_interest,
            gateway_name: GATEWAY_NAME.to_string(),
        });
    }

    bars
}

impl<P: PriceTablePort> DatafeedPort for AktoolDatafeed<P> {
    fn init(&mut self, sink: &dyn MessageSink) -> bool {
        if self.inited {
            return true;
        }
        match self.config.validate() {
            Ok(()) => {
                log::info!("datafeed initialized");
                self.inited = true;
            }
            Err(reason) => Self::report(sink, QueryError::NotInitialized { reason }),
        }
        self.inited
    }

    fn query_bar_history(
        &mut self,
        req: &HistoryRequest,
        sink: &dyn MessageSink,
    ) -> Vec<BarData> {
        if !self.inited && !self.init(sink) {
            return Vec::new();
        }

        if !SUPPORTED_EXCHANGES.contains(&req.exchange) {
            Self::report(
                sink,
                QueryError::UnsupportedInstrument {
                    vt_symbol: req.vt_symbol(),
                },
            );
            return Vec::new();
        }

        let end = req.end_or((self.clock)());

        match self.fetch(req, end) {
            Ok(Some(table)) => {
                let bars = map_rows(req, &table, end);
                log::info!(
                    "{}: {} of {} rows mapped to bars",
                    req.vt_symbol(),
                    bars.len(),
                    table.len()
                );
                bars
            }
            Ok(None) => {
                log::debug!("{}: provider returned no data", req.vt_symbol());
                Vec::new()
            }
            Err(e) => {
                Self::report(sink, e);
                Vec::new()
            }
        }
    }

    fn query_tick_history(
        &mut self,
        _req: &HistoryRequest,
        sink: &dyn MessageSink,
    ) -> Vec<TickData> {
        Self::report(sink, QueryError::TickUnsupported);
        Vec::new()
    }
}
