//! Domain error types.

use crate::domain::constant::Interval;

/// Top-level error type for barfeed.
#[derive(Debug, thiserror::Error)]
pub enum DatafeedError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("provider error: {reason}")]
    Provider { reason: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("no data for {vt_symbol}")]
    NoData { vt_symbol: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&DatafeedError> for std::process::ExitCode {
    fn from(err: &DatafeedError) -> Self {
        let code: u8 = match err {
            DatafeedError::Io(_) => 1,
            DatafeedError::ConfigParse { .. }
            | DatafeedError::ConfigMissing { .. }
            | DatafeedError::ConfigInvalid { .. } => 2,
            DatafeedError::Provider { .. } => 3,
            DatafeedError::InvalidRequest { .. } => 4,
            DatafeedError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

/// Anticipated query failures. These never escape a query: the rendered
/// message goes to the caller's sink and the query yields no data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("unsupported instrument: {vt_symbol}")]
    UnsupportedInstrument { vt_symbol: String },

    #[error("failed to query bars: unsupported interval {}", display_interval(.interval))]
    UnsupportedInterval { interval: Option<Interval> },

    #[error("failed to query bars: provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    #[error("failed to query ticks: tick data is not supported")]
    TickUnsupported,

    #[error("datafeed not initialized: {reason}")]
    NotInitialized { reason: String },
}

fn display_interval(interval: &Option<Interval>) -> String {
    match interval {
        Some(i) => i.to_string(),
        None => "none".to_string(),
    }
}
