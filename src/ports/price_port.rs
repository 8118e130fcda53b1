//! Upstream market-data provider port.

use crate::domain::error::DatafeedError;
use crate::domain::price_table::{AdjustMode, PriceTable};

pub trait PriceTablePort {
    /// Fetch the provider's historical price table.
    ///
    /// `start_date` and `end_date` are compact `YYYYMMDD` strings and both
    /// inclusive. `Ok(None)` means the provider had nothing for the query.
    fn fetch_price_table(
        &self,
        symbol: &str,
        period: &str,
        start_date: &str,
        end_date: &str,
        adjust: AdjustMode,
    ) -> Result<Option<PriceTable>, DatafeedError>;
}
