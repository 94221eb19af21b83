use iced::Application;
use ship_classifier::client::config::ClientConfig;
use ship_classifier::client::gui::app::ClassifierApp;
use ship_classifier::client::services::dispatcher::Services;
use ship_classifier::utils::logger::ClassifierLogger;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    ClassifierLogger::init(&log_level);
    ClassifierLogger::install_panic_hook();

    let config = ClientConfig::from_env();
    let services = Services::from_config(&config)?;

    let settings = iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 760.0),
            ..Default::default()
        },
        ..iced::Settings::with_flags((config, services))
    };
    ClassifierApp::run(settings)?;
    Ok(())
}
