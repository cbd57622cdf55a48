use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// One colour set per theme.
#[derive(Clone, Copy)]
pub struct UiPalette {
    pub background: Color32,
    pub card: Color32,
    pub card_header: Color32,
    pub card_border: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub buy: Color32,
    pub sell: Color32,
    pub danger: Color32,
    pub danger_bg: Color32,
    pub caution: Color32,
    pub caution_bg: Color32,
    pub warning_text: Color32,
    pub warning_bg: Color32,
    pub info: Color32,
    pub success: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
pub struct UiConfig {
    pub light: UiPalette,
    pub dark: UiPalette,
    pub card_radius: u8,
    pub trading_panel_width: f32,
    pub popup_width: f32,
    pub notice_width: f32,
    pub modal_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    light: UiPalette {
        background: Color32::WHITE,
        card: Color32::WHITE,
        card_header: Color32::from_rgb(0xfd, 0xf2, 0xf8), // pink-50
        card_border: Color32::from_rgb(0xfb, 0xcf, 0xe8), // pink-200
        heading: Color32::from_rgb(0x11, 0x18, 0x27),
        label: Color32::from_rgb(0x4b, 0x55, 0x63),
        subdued: Color32::from_rgb(0x6b, 0x72, 0x80),
        accent: Color32::from_rgb(0xec, 0x48, 0x99), // pink-500
        accent_hover: Color32::from_rgb(0xdb, 0x27, 0x77),
        buy: Color32::from_rgb(0x16, 0xa3, 0x4a),
        sell: Color32::from_rgb(0xdc, 0x26, 0x26),
        danger: Color32::from_rgb(0xdc, 0x26, 0x26),
        danger_bg: Color32::from_rgb(0xfe, 0xf2, 0xf2),
        caution: Color32::from_rgb(0xea, 0x58, 0x0c),
        caution_bg: Color32::from_rgb(0xff, 0xf7, 0xed),
        warning_text: Color32::from_rgb(0x85, 0x4d, 0x0e),
        warning_bg: Color32::from_rgb(0xfe, 0xfc, 0xe8),
        info: Color32::from_rgb(0x25, 0x63, 0xeb),
        success: Color32::from_rgb(0x16, 0xa3, 0x4a),
    },
    dark: UiPalette {
        background: Color32::from_rgb(17, 17, 22),
        card: Color32::from_rgb(28, 28, 34),
        card_header: Color32::from_rgb(45, 24, 38),
        card_border: Color32::from_rgb(112, 38, 78),
        heading: Color32::from_rgb(240, 240, 245),
        label: Color32::GRAY,
        subdued: Color32::from_gray(120),
        accent: Color32::from_rgb(0xec, 0x48, 0x99),
        accent_hover: Color32::from_rgb(0xf4, 0x72, 0xb6),
        buy: Color32::from_rgb(0x10, 0xb9, 0x81),
        sell: Color32::from_rgb(0xef, 0x44, 0x44),
        danger: Color32::from_rgb(0xf8, 0x71, 0x71),
        danger_bg: Color32::from_rgb(60, 20, 24),
        caution: Color32::from_rgb(0xfb, 0x92, 0x3c),
        caution_bg: Color32::from_rgb(58, 34, 16),
        warning_text: Color32::from_rgb(0xfd, 0xe0, 0x47),
        warning_bg: Color32::from_rgb(50, 44, 14),
        info: Color32::from_rgb(0x93, 0xc5, 0xfd),
        success: Color32::from_rgb(0x86, 0xef, 0xac),
    },
    card_radius: 8,
    trading_panel_width: 340.0,
    popup_width: 320.0,
    notice_width: 256.0,
    modal_width: 420.0,
};

impl UiConfig {
    pub fn palette(&self, dark_mode: bool) -> &UiPalette {
        if dark_mode { &self.dark } else { &self.light }
    }

    /// Page background behind the cards.
    pub fn page_frame(&self, palette: &UiPalette) -> Frame {
        Frame {
            fill: palette.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Bordered card body.
    pub fn card_frame(&self, palette: &UiPalette, border: Color32) -> Frame {
        Frame {
            fill: palette.card,
            stroke: Stroke::new(1.0, border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(self.card_radius),
            ..Default::default()
        }
    }

    /// Tinted callout inside a card.
    pub fn callout_frame(&self, fill: Color32, border: Color32) -> Frame {
        Frame {
            fill,
            stroke: Stroke::new(1.0, border),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(self.card_radius),
            ..Default::default()
        }
    }
}
