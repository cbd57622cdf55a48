use crate::domain::OrderSide;
use crate::tour::TourStatus;

/// Everything a click can ask of the app. Panels push these while drawing and
/// `App::reduce_ui` applies them once the frame's widgets are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SubmitOrder { side: OrderSide },
    ToggleTheme,
    StartTour,
    TourStatusChanged { status: TourStatus },
    TryAgain,
}
