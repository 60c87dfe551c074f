pub mod auralens_app;
pub mod controller;
pub mod notifications;
pub mod views;

pub use auralens_app::AuraLensApp;
pub use controller::{Screen, ScreenController, SelectOutcome};
