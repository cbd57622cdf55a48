use std::time::Duration;

use eframe::{
    Frame, Storage,
    egui::{Context, Visuals},
};
use rand::Rng;

use crate::{
    Cli,
    app::{ThemePreference, UiEvent},
    config::{CHART, DF},
    domain::{Candle, OrderSide},
    engine::{BreachEngine, SimEvent, SubmitOutcome},
    models::{TradeForm, synthetic_candles},
    tour::{TourController, Walkthrough},
    ui::{AnchorRects, UI_CONFIG, render_popups, render_tour_overlay},
    utils::{AppInstant, today_utc},
};

/// One dashboard session plus the theme that outlives it.
pub struct App {
    pub(crate) theme: ThemePreference,
    /// Set by `--dark`. A forced theme is never written back until the user toggles.
    pub(crate) theme_forced: bool,
    pub(crate) engine: BreachEngine,
    pub(crate) form: TradeForm,
    pub(crate) tour: TourController,
    pub(crate) walkthrough: Walkthrough,
    pub(crate) candles: Vec<Candle>,
    session_start: AppInstant,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let theme = if args.dark {
            ThemePreference::new(true)
        } else {
            ThemePreference::load(cc.storage)
        };
        let mut app = Self::from_parts(theme, &mut rand::thread_rng());
        app.theme_forced = args.dark;
        apply_visuals(&cc.egui_ctx, app.theme);

        if args.start_tour {
            app.restart_tour();
        }
        app
    }

    pub(crate) fn from_parts<R: Rng + ?Sized>(theme: ThemePreference, rng: &mut R) -> Self {
        Self {
            theme,
            theme_forced: false,
            engine: BreachEngine::new(),
            form: TradeForm::default(),
            tour: TourController::default(),
            walkthrough: Walkthrough::default(),
            candles: synthetic_candles(rng, today_utc(), CHART.candle_count, CHART.seed_price),
            session_start: AppInstant::now(),
        }
    }

    /// Time since this session started. Every timer runs on this clock.
    fn now(&self) -> Duration {
        self.session_start.elapsed()
    }

    pub(crate) fn submit_order(&mut self, side: OrderSide) -> SubmitOutcome {
        let now = self.now();
        self.engine.submit_order(side, &mut self.form, now)
    }

    pub(crate) fn toggle_theme(&mut self, storage: Option<&mut (dyn Storage + 'static)>) {
        self.theme.toggle();
        self.theme_forced = false;
        match storage {
            Some(storage) => self.theme.store(storage),
            None => log::warn!("No storage available, theme change lasts for this run only"),
        }
    }

    pub(crate) fn restart_tour(&mut self) {
        let now = self.now();
        self.tour.restart(now);
    }

    /// "Try Again": a fresh session on a fresh clock. Only the theme is kept.
    pub(crate) fn restart_session<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.engine.teardown();
        self.tour.teardown();
        let (theme, forced) = (self.theme, self.theme_forced);
        *self = Self::from_parts(theme, rng);
        self.theme_forced = forced;
        if DF.log_simulation_events {
            log::info!("Session restarted");
        }
    }

    pub(crate) fn reduce_ui(&mut self, ev: UiEvent, storage: Option<&mut (dyn Storage + 'static)>) {
        match ev {
            UiEvent::SubmitOrder { side } => {
                let outcome = self.submit_order(side);
                if DF.log_orders {
                    log::info!("{} order -> {:?}", side, outcome);
                }
            }
            UiEvent::ToggleTheme => self.toggle_theme(storage),
            UiEvent::StartTour => self.restart_tour(),
            UiEvent::TourStatusChanged { status } => self.tour.on_status(status),
            UiEvent::TryAgain => self.restart_session(&mut rand::thread_rng()),
        }
    }

    /// Fires everything due by `now`.
    pub(crate) fn tick(&mut self, now: Duration) {
        for event in self.engine.advance(now) {
            if DF.log_simulation_events {
                match event {
                    SimEvent::BalanceDrained { balance } => log::info!("Balance drained to {}", balance),
                    SimEvent::PhaseChanged { from, to } => log::info!("Drain phase {} -> {}", from, to),
                    SimEvent::NoticeCleared => log::info!("Insufficient funds notice cleared"),
                }
            }
        }
        self.tour.advance(now);
    }

    pub(crate) fn next_deadline(&self) -> Option<Duration> {
        match (self.engine.next_deadline(), self.tour.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        self.tick(self.now());
        apply_visuals(ctx, self.theme);

        let mut events = Vec::new();
        let mut anchors = AnchorRects::default();
        crate::trace_time!("Render dashboard", DF.slow_frame_micros, {
            self.render_header(ctx, &mut events, &mut anchors);
            self.render_body(ctx, &mut events, &mut anchors);
            let palette = UI_CONFIG.palette(self.theme.is_dark());
            render_popups(ctx, &self.engine.popups(), palette, &mut events);
            render_tour_overlay(ctx, &self.tour, &mut self.walkthrough, &anchors, &mut events);
        });

        for ev in events {
            self.reduce_ui(ev, frame.storage_mut());
        }

        if let Some(deadline) = self.next_deadline() {
            let wait = deadline.saturating_sub(self.now());
            if DF.log_timers {
                log::debug!("Next timer in {:?}", wait);
            }
            ctx.request_repaint_after(wait);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if !self.theme_forced {
            self.theme.store(storage);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.engine.teardown();
        self.tour.teardown();
    }
}

fn apply_visuals(ctx: &Context, theme: ThemePreference) {
    let palette = UI_CONFIG.palette(theme.is_dark());
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.card;
    visuals.selection.bg_fill = palette.accent;
    visuals.hyperlink_color = palette.accent;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PERSISTENCE, SIMULATION};
    use crate::domain::OrderKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    fn app() -> App {
        App::from_parts(ThemePreference::default(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn starts_with_a_full_balance_and_a_chart() {
        let app = app();
        assert_eq!(app.engine.state().balance, SIMULATION.starting_balance);
        assert_eq!(app.candles.len(), CHART.candle_count);
        assert!(!app.tour.is_running());
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn an_order_drains_the_balance_over_time() {
        let mut app = app();
        app.form.quantity = "10".to_string();
        app.reduce_ui(UiEvent::SubmitOrder { side: OrderSide::Buy }, None);

        assert_eq!(app.engine.history().len(), 1);
        assert!(app.form.quantity.is_empty());
        assert!(app.next_deadline().is_some());

        app.tick(Duration::from_secs(10));
        let state = app.engine.state();
        assert_eq!(state.balance, 0);
        assert!(state.fully_drained);
        assert!(app.engine.popups().drained_modal);
    }

    #[test]
    fn blank_form_does_nothing() {
        let mut app = app();
        app.form.active_tab = OrderKind::Limit;
        app.form.quantity = "5".to_string();
        let outcome = app.submit_order(OrderSide::Sell);
        assert!(!outcome.is_accepted());
        assert!(app.engine.history().is_empty());
        assert_eq!(app.form.quantity, "5");
    }

    #[test]
    fn try_again_resets_everything_but_the_theme() {
        let mut app = app();
        app.theme = ThemePreference::new(true);
        app.form.quantity = "1".to_string();
        app.submit_order(OrderSide::Buy);
        app.tick(Duration::from_secs(10));
        app.restart_tour();

        app.restart_session(&mut StdRng::seed_from_u64(2));

        assert!(app.theme.is_dark());
        assert_eq!(app.engine.state().balance, SIMULATION.starting_balance);
        assert!(app.engine.history().is_empty());
        assert!(!app.engine.popups().any_visible());
        assert!(!app.tour.is_restart_pending());
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let mut app = app();
        let mut storage = MemoryStorage::default();
        app.reduce_ui(UiEvent::ToggleTheme, Some(&mut storage));
        assert!(app.theme.is_dark());
        assert!(storage.values.contains_key(PERSISTENCE.app.theme_key));
        assert!(ThemePreference::load(Some(&storage)).is_dark());

        app.reduce_ui(UiEvent::ToggleTheme, None);
        assert!(!app.theme.is_dark());
    }

    #[test]
    fn forced_dark_leaves_the_stored_theme_alone() {
        let mut storage = MemoryStorage::default();
        ThemePreference::new(false).store(&mut storage);

        let mut app = App::from_parts(ThemePreference::new(true), &mut StdRng::seed_from_u64(1));
        app.theme_forced = true;
        eframe::App::save(&mut app, &mut storage);
        assert!(!ThemePreference::load(Some(&storage)).is_dark());

        app.restart_session(&mut StdRng::seed_from_u64(2));
        eframe::App::save(&mut app, &mut storage);
        assert!(!ThemePreference::load(Some(&storage)).is_dark());

        // A toggle is the user's own choice and is kept from then on.
        app.reduce_ui(UiEvent::ToggleTheme, Some(&mut storage));
        app.reduce_ui(UiEvent::ToggleTheme, None);
        eframe::App::save(&mut app, &mut storage);
        assert!(ThemePreference::load(Some(&storage)).is_dark());
    }

    #[test]
    fn start_tour_mounts_after_the_delay_and_finishes_on_status() {
        let mut app = app();
        app.reduce_ui(UiEvent::StartTour, None);
        assert!(app.tour.is_restart_pending());
        assert!(!app.tour.is_running());

        app.tick(Duration::from_secs(5));
        assert!(app.tour.is_running());
        assert_eq!(app.tour.instance_key(), 1);

        app.reduce_ui(
            UiEvent::TourStatusChanged {
                status: crate::tour::TourStatus::Skipped,
            },
            None,
        );
        assert!(!app.tour.is_running());
    }
}
