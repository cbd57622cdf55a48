pub mod popups;
pub mod price_series;
pub mod trade_form;

pub use popups::{BreachProgress, PopupSet, progress_percent, stolen_amount};
pub use price_series::{price_bounds, synthetic_candles};
pub use trade_form::{TradeForm, parse_ticket};
