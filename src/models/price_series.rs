use chrono::{Duration as ChronoDuration, NaiveDate};
use rand::Rng;

use crate::config::CHART;
use crate::domain::Candle;

/// Random-walk daily candles ending the day before `today`.
///
/// Each candle opens on the previous close, moves by at most half of
/// `max_body_move` either way, and grows wicks of up to `max_wick`.
/// Prices are floored at zero.
pub fn synthetic_candles<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    count: usize,
    seed_price: f64,
) -> Vec<Candle> {
    let mut candles = Vec::with_capacity(count);
    let mut price = seed_price;
    for i in 0..count {
        let open = price;
        let close = open + (rng.gen_range(0.0..1.0) - 0.5) * CHART.max_body_move;
        let high = open.max(close) + rng.gen_range(0.0..1.0) * CHART.max_wick;
        let low = open.min(close) - rng.gen_range(0.0..1.0) * CHART.max_wick;
        let date = today - ChronoDuration::days((count - i) as i64);
        candles.push(Candle::new(
            date,
            open.max(0.0),
            high.max(0.0),
            low.max(0.0),
            close.max(0.0),
        ));
        price = close;
    }
    candles
}

/// Lowest low and highest high, for framing the chart.
pub fn price_bounds(candles: &[Candle]) -> Option<(f64, f64)> {
    let first = candles.first()?;
    Some(candles.iter().fold(
        (first.low_price, first.high_price),
        |(lo, hi), c| (lo.min(c.low_price), hi.max(c.high_price)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn thirty_consecutive_days_before_today() {
        let mut rng = StdRng::seed_from_u64(7);
        let candles = synthetic_candles(&mut rng, today(), 30, 85.0);
        assert_eq!(candles.len(), 30);
        assert_eq!(candles[0].date, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
        assert_eq!(candles[29].date, NaiveDate::from_ymd_opt(2025, 6, 29).unwrap());
        for pair in candles.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn candles_chain_and_stay_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        let candles = synthetic_candles(&mut rng, today(), 30, 85.0);
        assert_eq!(candles[0].open_price, 85.0);
        for c in &candles {
            assert!(c.high_price >= c.open_price.max(c.close_price));
            assert!(c.low_price <= c.open_price.min(c.close_price));
            assert!((c.close_price - c.open_price).abs() <= CHART.max_body_move / 2.0);
            assert!(c.low_price >= 0.0);
        }
        for pair in candles.windows(2) {
            assert_eq!(pair[1].open_price, pair[0].close_price);
        }
    }

    #[test]
    fn prices_never_go_negative_near_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let candles = synthetic_candles(&mut rng, today(), 30, 0.5);
        assert!(candles.iter().all(|c| c.low_price >= 0.0 && c.open_price >= 0.0));
    }

    #[test]
    fn same_seed_same_chart() {
        let a = synthetic_candles(&mut StdRng::seed_from_u64(9), today(), 30, 85.0);
        let b = synthetic_candles(&mut StdRng::seed_from_u64(9), today(), 30, 85.0);
        assert_eq!(a, b);
        let (lo, hi) = price_bounds(&a).unwrap();
        assert!(lo <= hi);
        assert!(price_bounds(&[]).is_none());
    }
}
