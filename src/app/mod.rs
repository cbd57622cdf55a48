mod event;
mod root;
mod theme;

pub(crate) use event::UiEvent;
pub use root::App;
pub use theme::ThemePreference;
