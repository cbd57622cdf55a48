use crate::tour::controller::TourStatus;
use crate::tour::steps::TOUR_LOCALE;

/// Buttons on the tour tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAction {
    Next,
    Back,
    Skip,
    /// The ✕ in the corner. Moves on like `Next`; only Skip ends early.
    Close,
}

/// Position inside one mounted tour instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Walkthrough {
    instance_key: u64,
    index: usize,
}

impl Walkthrough {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Re-mounts on a new instance key: back to the first step.
    pub fn sync(&mut self, instance_key: u64) {
        if self.instance_key != instance_key {
            self.instance_key = instance_key;
            self.index = 0;
        }
    }

    pub fn is_last(&self, len: usize) -> bool {
        self.index + 1 >= len
    }

    /// Applies a button press. Returns a terminal status when the tour ends.
    pub fn apply(&mut self, action: TourAction, len: usize) -> Option<TourStatus> {
        match action {
            TourAction::Next | TourAction::Close => {
                if self.is_last(len) {
                    Some(TourStatus::Finished)
                } else {
                    self.index += 1;
                    None
                }
            }
            TourAction::Back => {
                self.index = self.index.saturating_sub(1);
                None
            }
            TourAction::Skip => Some(TourStatus::Skipped),
        }
    }

    /// "Next → (3/10)" or the final call to action.
    pub fn primary_label(&self, len: usize, show_progress: bool) -> String {
        let base = if self.is_last(len) {
            TOUR_LOCALE.last
        } else {
            TOUR_LOCALE.next
        };
        if show_progress {
            format!("{} ({}/{})", base, self.index + 1, len)
        } else {
            base.to_string()
        }
    }
}
