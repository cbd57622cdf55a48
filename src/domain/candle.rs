use chrono::NaiveDate;

#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One daily OHLC bar of the decorative price chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub date: NaiveDate,

    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

impl Candle {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Candle {
            date,
            open_price: open,
            high_price: high,
            low_price: low,
            close_price: close,
        }
    }

    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open_price, self.close_price),
            CandleType::Bearish => (self.close_price, self.open_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    #[test]
    fn body_range_is_low_then_high() {
        let up = Candle::new(day(), 84.0, 86.5, 83.0, 85.5);
        assert_eq!(up.get_type(), CandleType::Bullish);
        assert_eq!(up.body_range(), (84.0, 85.5));

        let down = Candle::new(day(), 85.5, 86.0, 83.0, 84.0);
        assert_eq!(down.get_type(), CandleType::Bearish);
        assert_eq!(down.body_range(), (84.0, 85.5));
    }
}
