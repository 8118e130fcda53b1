//! Property tests for bar mapping invariants.

mod common;

use barfeed::domain::bar::{round_to, PRICE_TICK};
use barfeed::domain::constant::Exchange;
use barfeed::domain::datafeed::map_rows;
use barfeed::domain::price_table::{PriceRow, PriceTable};
use chrono::Duration;
use common::*;
use proptest::prelude::*;

fn is_six_places(x: f64) -> bool {
    round_to(x, PRICE_TICK) == x
}

fn arb_row(offset: i64) -> impl Strategy<Value = PriceRow> {
    (
        proptest::option::of(0.0f64..10_000.0),
        proptest::option::of(0.0f64..10_000.0),
        proptest::option::of(0.0f64..1e9),
        proptest::option::of(0.0f64..1e12),
    )
        .prop_map(move |(open, close, volume, turnover)| PriceRow {
            date: date(2024, 1, 1) + Duration::days(offset),
            open,
            close,
            high: open.map(|o| o + 1.0),
            low: close.map(|c| (c - 1.0).max(0.0)),
            volume,
            turnover,
            open_interest: None,
        })
}

fn arb_table() -> impl Strategy<Value = Vec<PriceRow>> {
    proptest::collection::vec(0i64..60, 0..40).prop_flat_map(|offsets| {
        offsets
            .into_iter()
            .map(arb_row)
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn round_to_yields_six_places(x in -1e6f64..1e6) {
        let r = round_to(x, PRICE_TICK);
        prop_assert!(is_six_places(r));
        prop_assert!((r - x).abs() <= 0.5e-6 + 1e-9);
    }

    #[test]
    fn emitted_bars_precede_end_and_form_a_prefix(rows in arb_table(), end_offset in 0i64..60) {
        let end = at(2024, 1, 1) + Duration::days(end_offset);
        let req = daily_request(Exchange::Sse, at(2024, 1, 1), end);
        let table = PriceTable::new(rows.clone());

        let bars = map_rows(&req, &table, end);

        let expected = rows
            .iter()
            .take_while(|r| r.date.and_hms_opt(0, 0, 0).unwrap() < end)
            .count();
        prop_assert_eq!(bars.len(), expected);
        for (bar, row) in bars.iter().zip(rows.iter()) {
            prop_assert!(bar.datetime < end);
            prop_assert_eq!(bar.datetime.date(), row.date);
            prop_assert_eq!(&bar.symbol, &req.symbol);
            prop_assert_eq!(bar.exchange, req.exchange);
            prop_assert_eq!(bar.interval, req.interval);
            prop_assert!(is_six_places(bar.open_price));
            prop_assert!(is_six_places(bar.close_price));
            prop_assert!(is_six_places(bar.high_price));
            prop_assert!(is_six_places(bar.low_price));
            prop_assert_eq!(bar.volume, row.volume.unwrap_or(0.0));
            prop_assert_eq!(bar.turnover, row.turnover.unwrap_or(0.0));
            prop_assert_eq!(bar.open_interest, 0.0);
        }
    }
}
