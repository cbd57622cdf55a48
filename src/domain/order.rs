use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum OrderSide {
    #[strum(to_string = "buy")]
    Buy,
    #[strum(to_string = "sell")]
    Sell,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum OrderKind {
    #[default]
    #[strum(to_string = "market")]
    Market,
    #[strum(to_string = "limit")]
    Limit,
}

/// A validated order, before it gets an id and a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTicket {
    pub side: OrderSide,
    pub kind: OrderKind,
    pub quantity: f64,
    pub price: Option<f64>,
}

/// Immutable record of a simulated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub price: Option<f64>,
    pub quantity: f64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(ticket: OrderTicket, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            side: ticket.side,
            kind: ticket.kind,
            price: ticket.price,
            quantity: ticket.quantity,
            created_at,
        }
    }

    /// "BUY market"
    pub fn headline(&self) -> String {
        format!("{} {}", self.side.to_string().to_uppercase(), self.kind)
    }
}

/// Most recent orders, newest first. Anything past `capacity` falls off the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistory {
    capacity: usize,
    orders: VecDeque<Order>,
}

impl OrderHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            orders: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Prepends `order`, returning whatever got evicted.
    pub fn record(&mut self, order: Order) -> Option<Order> {
        self.orders.push_front(order);
        if self.orders.len() > self.capacity {
            self.orders.pop_back()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn newest(&self) -> Option<&Order> {
        self.orders.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(quantity: f64) -> OrderTicket {
        OrderTicket {
            side: OrderSide::Buy,
            kind: OrderKind::Market,
            quantity,
            price: Some(85.42),
        }
    }

    #[test]
    fn history_keeps_newest_first_and_evicts_oldest() {
        let mut history = OrderHistory::new(5);
        let mut evicted = Vec::new();
        for q in 1..=6 {
            if let Some(old) = history.record(Order::new(ticket(q as f64), Utc::now())) {
                evicted.push(old.quantity);
            }
        }
        assert_eq!(history.len(), 5);
        assert_eq!(evicted, vec![1.0]);
        let quantities: Vec<f64> = history.iter().map(|o| o.quantity).collect();
        assert_eq!(quantities, vec![6.0, 5.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn orders_get_distinct_ids() {
        let a = Order::new(ticket(1.0), Utc::now());
        let b = Order::new(ticket(1.0), Utc::now());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn headline_reads_like_the_order_card() {
        let order = Order::new(
            OrderTicket {
                side: OrderSide::Sell,
                kind: OrderKind::Limit,
                quantity: 2.0,
                price: Some(80.0),
            },
            Utc::now(),
        );
        assert_eq!(order.headline(), "SELL limit");
    }
}
