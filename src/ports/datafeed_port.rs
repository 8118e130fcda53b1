//! Datafeed port trait: the narrow interface a host trading platform calls.

use crate::domain::bar::{BarData, TickData};
use crate::domain::request::HistoryRequest;
use crate::ports::sink::MessageSink;

pub trait DatafeedPort {
    /// Prepare the datafeed. Failures are reported through `sink`.
    fn init(&mut self, _sink: &dyn MessageSink) -> bool {
        true
    }

    /// Query bar history. Never fails: problems yield an empty result and
    /// a message on `sink`.
    fn query_bar_history(&mut self, req: &HistoryRequest, sink: &dyn MessageSink)
        -> Vec<BarData>;

    /// Query tick history, with the same failure convention as bars.
    fn query_tick_history(
        &mut self,
        req: &HistoryRequest,
        sink: &dyn MessageSink,
    ) -> Vec<TickData>;
}
