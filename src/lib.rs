pub mod app;
pub mod classification;
pub mod config;
pub mod error;
pub mod media;

pub use error::{AppError, ClassifyError};

pub use app::{AuraLensApp, Screen, ScreenController};
pub use classification::{ClassificationResult, ClassificationService};
