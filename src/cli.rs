//! CLI definition and dispatch.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_price_adapter::CsvPriceAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::bar::BarData;
use crate::domain::constant::{Exchange, Interval};
use crate::domain::datafeed::AktoolDatafeed;
use crate::domain::datafeed_config::DatafeedConfig;
use crate::domain::error::DatafeedError;
use crate::domain::request::HistoryRequest;
use crate::ports::datafeed_port::DatafeedPort;
use crate::ports::sink::{LogSink, MessageSink, StderrSink};

#[derive(Parser, Debug)]
#[command(name = "barfeed", about = "A-share bar history datafeed")]
pub struct Cli {
    /// Send datafeed messages to the log instead of stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query bar history and write it as CSV
    Bars {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        exchange: String,
        #[arg(long)]
        interval: Option<String>,
        /// First date, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Exclusive end date, YYYY-MM-DD (defaults to now)
        #[arg(long)]
        end: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Query tick history
    Ticks {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        exchange: String,
        #[arg(long)]
        start: String,
    },
    /// List the enabled interval mapping
    Intervals {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let sink: &dyn MessageSink = if cli.quiet { &LogSink } else { &StderrSink };
    match cli.command {
        Command::Bars {
            config,
            symbol,
            exchange,
            interval,
            start,
            end,
            output,
        } => match build_request(
            &symbol,
            &exchange,
            interval.as_deref(),
            &start,
            end.as_deref(),
        ) {
            Ok(req) => run_bars(&config, &req, output.as_ref(), sink),
            Err(e) => fail(e),
        },
        Command::Ticks {
            config,
            symbol,
            exchange,
            start,
        } => run_ticks(&config, &symbol, &exchange, &start, sink),
        Command::Intervals { config } => run_intervals(&config),
    }
}

fn fail(err: DatafeedError) -> ExitCode {
    eprintln!("error: {err}");
    (&err).into()
}

pub fn load_config(path: &PathBuf) -> Result<DatafeedConfig, DatafeedError> {
    let adapter =
        FileConfigAdapter::from_file(path).map_err(|e| DatafeedError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
    DatafeedConfig::from_config(&adapter)
}

pub fn build_datafeed(
    config: DatafeedConfig,
) -> Result<AktoolDatafeed<CsvPriceAdapter>, DatafeedError> {
    let table_dir = config.require_table_dir()?.clone();
    Ok(AktoolDatafeed::new(config, CsvPriceAdapter::new(table_dir)))
}

fn parse_day(value: &str, field: &str) -> Result<NaiveDateTime, DatafeedError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| DatafeedError::InvalidRequest {
            reason: format!("invalid {} {:?}, expected YYYY-MM-DD", field, value),
        })
}

pub fn build_request(
    symbol: &str,
    exchange: &str,
    interval: Option<&str>,
    start: &str,
    end: Option<&str>,
) -> Result<HistoryRequest, DatafeedError> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(DatafeedError::InvalidRequest {
            reason: "symbol must not be empty".into(),
        });
    }
    let exchange: Exchange = exchange.parse().map_err(|e| DatafeedError::InvalidRequest {
        reason: format!("{e}"),
    })?;
    let interval = interval
        .map(|s| s.parse::<Interval>())
        .transpose()
        .map_err(|e| DatafeedError::InvalidRequest {
            reason: format!("{e}"),
        })?;
    let start = parse_day(start, "start")?;
    let end = end.map(|e| parse_day(e, "end")).transpose()?;

    if let Some(end) = end {
        if end <= start {
            return Err(DatafeedError::InvalidRequest {
                reason: "end must be after start".into(),
            });
        }
    }

    Ok(HistoryRequest::new(symbol, exchange, interval, start, end))
}

/// Write bars as CSV with a header row.
pub fn write_bars<W: Write>(writer: W, bars: &[BarData]) -> Result<(), DatafeedError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for bar in bars {
        wtr.serialize(bar).map_err(|e| DatafeedError::Io(io::Error::other(e)))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run_bars_pipeline(
    datafeed: &mut dyn DatafeedPort,
    req: &HistoryRequest,
    output: Option<&PathBuf>,
    sink: &dyn MessageSink,
) -> Result<usize, DatafeedError> {
    let bars = datafeed.query_bar_history(req, sink);
    if bars.is_empty() {
        return Err(DatafeedError::NoData {
            vt_symbol: req.vt_symbol(),
        });
    }

    match output {
        Some(path) => {
            write_bars(File::create(path)?, &bars)?;
            eprintln!("{} bars written to: {}", bars.len(), path.display());
        }
        None => write_bars(io::stdout().lock(), &bars)?,
    }
    Ok(bars.len())
}

fn run_bars(
    config_path: &PathBuf,
    req: &HistoryRequest,
    output: Option<&PathBuf>,
    sink: &dyn MessageSink,
) -> ExitCode {
    log::info!("loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };
    let mut datafeed = match build_datafeed(config) {
        Ok(d) => d,
        Err(e) => return fail(e),
    };

    match run_bars_pipeline(&mut datafeed, req, output, sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn run_ticks(
    config_path: &PathBuf,
    symbol: &str,
    exchange: &str,
    start: &str,
    sink: &dyn MessageSink,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };
    let req = match build_request(symbol, exchange, None, start, None) {
        Ok(r) => r,
        Err(e) => return fail(e),
    };
    let mut datafeed = match build_datafeed(config) {
        Ok(d) => d,
        Err(e) => return fail(e),
    };

    let ticks = datafeed.query_tick_history(&req, sink);
    if ticks.is_empty() {
        return fail(DatafeedError::NoData {
            vt_symbol: req.vt_symbol(),
        });
    }
    ExitCode::SUCCESS
}

pub fn format_intervals(config: &DatafeedConfig) -> Vec<String> {
    config
        .intervals
        .entries()
        .iter()
        .map(|(interval, period)| format!("{interval:<4} -> {period}"))
        .collect()
}

fn run_intervals(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => return fail(e),
    };
    for line in format_intervals(&config) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
