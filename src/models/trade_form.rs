use anyhow::{Context, Result, bail};

use crate::config::MARKET;
use crate::domain::{OrderKind, OrderSide, OrderTicket};

/// Text the user has typed into the trading panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeForm {
    pub active_tab: OrderKind,
    pub quantity: String,
    pub limit_price: String,
}

impl TradeForm {
    /// Mirrors the disabled state of the trade buttons: something typed in
    /// every field the active tab shows.
    pub fn can_submit(&self) -> bool {
        match self.active_tab {
            OrderKind::Market => !self.quantity.trim().is_empty(),
            OrderKind::Limit => {
                !self.quantity.trim().is_empty() && !self.limit_price.trim().is_empty()
            }
        }
    }

    pub fn ticket(&self, side: OrderSide) -> Result<OrderTicket> {
        parse_ticket(
            side,
            self.active_tab,
            &self.quantity,
            Some(self.limit_price.as_str()),
        )
    }

    pub fn clear(&mut self) {
        self.quantity.clear();
        self.limit_price.clear();
    }
}

/// Validates raw input into a ticket.
///
/// Market orders are stamped with the quoted price; limit orders need a
/// positive price of their own.
pub fn parse_ticket(
    side: OrderSide,
    kind: OrderKind,
    quantity: &str,
    price: Option<&str>,
) -> Result<OrderTicket> {
    let quantity = parse_positive(quantity).context("quantity")?;
    let price = match kind {
        OrderKind::Market => MARKET.quoted_price,
        OrderKind::Limit => match price {
            Some(text) => parse_positive(text).context("limit price")?,
            None => bail!("limit price missing"),
        },
    };
    Ok(OrderTicket {
        side,
        kind,
        quantity,
        price: Some(price),
    })
}

fn parse_positive(text: &str) -> Result<f64> {
    let text = text.trim();
    if text.is_empty() {
        bail!("missing");
    }
    let value: f64 = text
        .parse()
        .with_context(|| format!("'{}' is not a number", text))?;
    if !value.is_finite() || value <= 0.0 {
        bail!("{} must be positive", value);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_non_numeric_and_non_positive_quantities() {
        for bad in ["", "   ", "abc", "12abc", "0", "-3", "NaN", "inf", "Infinity"] {
            assert!(
                parse_ticket(OrderSide::Buy, OrderKind::Market, bad, None).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn market_orders_carry_the_quoted_price() {
        let t = parse_ticket(OrderSide::Sell, OrderKind::Market, " 10 ", None).unwrap();
        assert_eq!(t.quantity, 10.0);
        assert_eq!(t.price, Some(MARKET.quoted_price));
    }

    #[test]
    fn limit_orders_need_their_own_price() {
        assert!(parse_ticket(OrderSide::Buy, OrderKind::Limit, "1", None).is_err());
        assert!(parse_ticket(OrderSide::Buy, OrderKind::Limit, "1", Some("")).is_err());
        assert!(parse_ticket(OrderSide::Buy, OrderKind::Limit, "1", Some("0")).is_err());
        let t = parse_ticket(OrderSide::Buy, OrderKind::Limit, "1", Some("84.5")).unwrap();
        assert_eq!(t.price, Some(84.5));
    }

    #[test]
    fn buttons_enable_per_tab() {
        let mut form = TradeForm::default();
        assert!(!form.can_submit());
        form.quantity = "10".into();
        assert!(form.can_submit());
        form.active_tab = OrderKind::Limit;
        assert!(!form.can_submit());
        form.limit_price = "85".into();
        assert!(form.can_submit());
        form.clear();
        assert!(form.quantity.is_empty() && form.limit_price.is_empty());
        assert_eq!(form.active_tab, OrderKind::Limit);
    }
}
