//! Property tests for the numeric engine's invariants.

mod common;

use common::*;
use foliobench::domain::align::CombinedTable;
use foliobench::domain::metrics::Metrics;
use foliobench::domain::rolling::rolling_returns;
use foliobench::domain::series::{PricePoint, Series};
use foliobench::domain::simulate::simulate;
use proptest::prelude::*;

fn series_from_values(values: &[f64]) -> Series {
    Series::from_points(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| PricePoint {
                date: date(2000 + (i / 12) as i32, (i % 12) as u32 + 1, 28),
                value: v,
            })
            .collect(),
    )
}

proptest! {
    #[test]
    fn metrics_fields_are_finite_or_absent(
        values in proptest::collection::vec(1.0f64..10_000.0, 0..120),
        rf in 0.0f64..0.2,
    ) {
        let metrics = Metrics::compute(&series_from_values(&values), rf);
        for field in [
            metrics.cagr,
            metrics.volatility,
            metrics.sharpe_ratio,
            metrics.sortino_ratio,
            metrics.max_drawdown,
            metrics.calmar_ratio,
        ] {
            if let Some(v) = field {
                prop_assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn cagr_matches_direct_formula(
        values in proptest::collection::vec(1.0f64..10_000.0, 2..120),
    ) {
        let series = series_from_values(&values);
        let metrics = Metrics::compute(&series, 0.06505);

        let first = series.first().unwrap();
        let last = series.last().unwrap();
        let years = (last.date - first.date).num_days() as f64 / 365.25;
        let expected = (last.value / first.value).powf(1.0 / years) - 1.0;

        let cagr = metrics.cagr.unwrap();
        prop_assert!((cagr - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn resample_monthly_is_idempotent(
        days in proptest::collection::vec(0i64..3650, 1..200),
        seed in 1.0f64..1000.0,
    ) {
        let start = date(2010, 1, 1);
        let points = days
            .iter()
            .enumerate()
            .map(|(i, &offset)| PricePoint {
                date: start + chrono::Duration::days(offset),
                value: seed + i as f64,
            })
            .collect();
        let series = Series::from_points(points);

        let once = series.resample_monthly();
        prop_assert_eq!(once.resample_monthly(), once);
    }

    #[test]
    fn simulation_is_pure(
        a in proptest::collection::vec(1.0f64..10_000.0, 2..60),
        b in proptest::collection::vec(1.0f64..10_000.0, 2..60),
    ) {
        let a = series_from_values(&a);
        let b = series_from_values(&b);
        let table = CombinedTable::align(&[("A", &a), ("B", &b)]);
        let definition = simple_strategy(
            "Mix",
            vec![direct_component("A", 0.6), direct_component("B", 0.6)],
        );

        let one = simulate(&table, &definition).unwrap();
        let two = simulate(&table, &definition).unwrap();
        prop_assert_eq!(one, two);
    }

    #[test]
    fn rolling_unavailable_below_window(
        len in 0usize..36,
    ) {
        let values: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
        prop_assert!(rolling_returns(&series_from_values(&values), 3).is_none());
    }
}
