//! Tour content. Plain data; the overlay decides how to draw it.

use strum_macros::{Display, EnumIter};

/// Screen regions a tour step can point at. Panels register their rect under
/// one of these while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TourAnchor {
    #[strum(to_string = "tour-welcome")]
    Welcome,
    #[strum(to_string = "tour-balance")]
    Balance,
    #[strum(to_string = "tour-price-chart")]
    PriceChart,
    #[strum(to_string = "tour-trading-tabs")]
    TradingTabs,
    #[strum(to_string = "tour-quantity-input")]
    QuantityInput,
    #[strum(to_string = "tour-trade-buttons")]
    TradeButtons,
    #[strum(to_string = "tour-recent-orders")]
    RecentOrders,
    #[strum(to_string = "tour-security-warning")]
    SecurityWarning,
    #[strum(to_string = "tour-educational-purpose")]
    EducationalPurpose,
    #[strum(to_string = "tour-help-button")]
    HelpButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Next to the anchor.
    #[default]
    Auto,
    /// Middle of the screen, no spotlight arrow.
    Center,
}

/// Tone of the closing line of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Info,
    Caution,
    Danger,
    Success,
}

#[derive(Debug, Clone, Copy)]
pub struct TourStep {
    pub target: TourAnchor,
    pub title: &'static str,
    pub body: &'static str,
    /// (icon, label, text). An empty label renders as a plain bullet.
    pub points: &'static [(&'static str, &'static str, &'static str)],
    pub footer: Option<(&'static str, Emphasis)>,
    pub placement: Placement,
    pub disable_beacon: bool,
}

pub struct TourLocale {
    pub back: &'static str,
    pub close: &'static str,
    pub last: &'static str,
    pub next: &'static str,
    pub skip: &'static str,
}

pub const TOUR_LOCALE: TourLocale = TourLocale {
    back: "← Back",
    close: "✕",
    last: "Experience the Hack!",
    next: "Next →",
    skip: "Skip Tour",
};

pub static TOUR_STEPS: &[TourStep] = &[
    TourStep {
        target: TourAnchor::Welcome,
        title: "Welcome to CEX Security Simulation! 🔐",
        body: "This simulation demonstrates the critical security risks of centralized exchanges (CEX).",
        points: &[
            ("🎯", "Learning Goal", "Understand CEX vulnerabilities"),
            ("⚠️", "Simulation", "Experience a security breach firsthand"),
            ("💡", "Takeaway", "Why self-custody matters"),
        ],
        footer: Some(("Experience what happens when exchanges get hacked!", Emphasis::Info)),
        placement: Placement::Center,
        disable_beacon: true,
    },
    TourStep {
        target: TourAnchor::Balance,
        title: "Your \"Safe\" Exchange Balance 💰",
        body: "CEX Reality: Your $50,000 is held by the exchange, not you.",
        points: &[
            ("🏦", "Custodial Risk", "Exchange controls your funds"),
            ("🔒", "No Real Ownership", "You only have an account balance"),
            ("⚡", "Vulnerability", "Single point of failure"),
        ],
        footer: Some(("Watch what happens when you place an order!", Emphasis::Caution)),
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::PriceChart,
        title: "Live Market Data 📈",
        body: "Real-time price feed from the exchange's servers. Everything looks normal... for now.",
        points: &[
            ("📊", "Centralized Data", "All from exchange servers"),
            ("🎯", "Current Price", "SOL at $85.42"),
            ("🔴", "Hidden Risk", "Server vulnerabilities"),
        ],
        footer: None,
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::TradingTabs,
        title: "Trading Interface 📝",
        body: "Standard CEX trading interface with Market and Limit order options.",
        points: &[(
            "⚠️",
            "Warning",
            "Any trading activity will trigger the security breach simulation!",
        )],
        footer: Some(("This is where the vulnerability lies hidden...", Emphasis::Caution)),
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::QuantityInput,
        title: "Order Entry Point 🎯",
        body: "Enter any amount to place an order. This will trigger the security breach.",
        points: &[
            ("💡", "Try it", "Enter \"10\" to see what happens"),
            ("🔴", "Simulation", "Mimics real hack scenarios"),
            ("📚", "Educational", "Learn about CEX risks safely"),
        ],
        footer: None,
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::TradeButtons,
        title: "The Vulnerability Trigger ⚡",
        body: "Critical Moment: Clicking any trade button will expose the exchange's security flaw.",
        points: &[
            ("🔓", "", "Simulates unauthorized access"),
            ("💸", "", "Triggers automatic fund draining"),
            ("⚠️", "", "Shows real-world hack scenarios"),
            ("🎓", "", "Educational demonstration only"),
        ],
        footer: Some(("Ready to see how exchanges get compromised?", Emphasis::Danger)),
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::RecentOrders,
        title: "Order History Tracking 📋",
        body: "Your trading activity gets recorded here - including the order that triggers the breach.",
        points: &[
            ("📝", "Order Logs", "All trades recorded"),
            ("🕐", "Timestamps", "Exact timing preserved"),
            ("⚠️", "Risk", "Data vulnerable to attackers"),
        ],
        footer: None,
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::SecurityWarning,
        title: "Security Breach Simulation 🚨",
        body: "When you place an order, you'll see:",
        points: &[
            ("🔓", "Breach Alert", "Unauthorized access detected"),
            ("📊", "Progress Bar", "Shows fund draining in real-time"),
            ("💸", "Balance Drop", "$10,000 drained every 0.5 seconds"),
            ("💥", "Final Message", "Complete loss of funds"),
        ],
        footer: Some(("This demonstrates real CEX hack scenarios!", Emphasis::Danger)),
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::EducationalPurpose,
        title: "Why This Simulation Matters 🎓",
        body: "Real-world CEX hacks have resulted in billions of dollars lost:",
        points: &[
            ("💥", "Mt. Gox (2014)", "850,000 BTC stolen"),
            ("🔥", "Coincheck (2018)", "$530 million drained"),
            ("⚡", "FTX (2022)", "$8 billion user funds missing"),
            ("🛡️", "Solution", "Self-custody with hardware wallets"),
        ],
        footer: Some(("Not your keys, not your crypto!", Emphasis::Success)),
        placement: Placement::Auto,
        disable_beacon: false,
    },
    TourStep {
        target: TourAnchor::HelpButton,
        title: "Ready to Experience the Hack! 💥",
        body: "You now understand:",
        points: &[
            ("✅", "", "CEX security vulnerabilities"),
            ("✅", "", "How exchange hacks happen"),
            ("✅", "", "The importance of self-custody"),
            ("✅", "", "Real-world hack examples"),
        ],
        footer: Some((
            "Go ahead and place an order to see the simulation!",
            Emphasis::Caution,
        )),
        placement: Placement::Auto,
        disable_beacon: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_anchor_gets_exactly_one_step() {
        let targets: HashSet<TourAnchor> = TOUR_STEPS.iter().map(|s| s.target).collect();
        assert_eq!(TOUR_STEPS.len(), 10);
        assert_eq!(targets.len(), TOUR_STEPS.len());
        assert!(TourAnchor::iter().all(|a| targets.contains(&a)));
    }

    #[test]
    fn tour_opens_centred_on_the_welcome_banner() {
        let first = &TOUR_STEPS[0];
        assert_eq!(first.target, TourAnchor::Welcome);
        assert_eq!(first.placement, Placement::Center);
        assert!(first.disable_beacon);
        assert_eq!(TOUR_STEPS.last().map(|s| s.target), Some(TourAnchor::HelpButton));
    }

    #[test]
    fn anchors_keep_their_target_names() {
        assert_eq!(TourAnchor::PriceChart.to_string(), "tour-price-chart");
        assert_eq!(TourAnchor::HelpButton.to_string(), "tour-help-button");
    }
}
