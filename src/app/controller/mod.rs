pub mod screen_controller;

pub use screen_controller::{Screen, ScreenController, SelectOutcome};
