mod controller;
mod steps;
mod walkthrough;

pub use controller::{TourController, TourStatus, TourTimer};
pub use steps::{Emphasis, Placement, TOUR_LOCALE, TOUR_STEPS, TourAnchor, TourStep};
pub use walkthrough::{TourAction, Walkthrough};
