use auralens::AuraLensApp;
use auralens::config::Settings;
use auralens::error::AppError;
use tracing::{Level, info};

fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let settings = Settings::load()?;
    init_logging(settings.tracing_level());
    info!(
        "Classifying against {} (timeout {}s)",
        settings.service.endpoint, settings.service.timeout_secs
    );

    AuraLensApp::start_gui(&settings, tokio::runtime::Handle::current())
}
