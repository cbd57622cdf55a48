pub mod candle;
pub mod order;

pub use candle::{Candle, CandleType};
pub use order::{Order, OrderHistory, OrderKind, OrderSide, OrderTicket};
