use std::collections::VecDeque;
use std::path::PathBuf;

use ship_classifier::client::config::ClientConfig;
use ship_classifier::client::gui::views::toast::Severity;
use ship_classifier::client::models::app_state::UploadController;
use ship_classifier::client::models::messages::{Effect, Message};
use ship_classifier::client::models::ui_state::UiState;
use ship_classifier::client::services::dispatcher::{self, Services};
use ship_classifier::utils::logger::ClassifierLogger;

const USAGE: &str = "usage: ship-classify <image> [--report]";

/// Feeds messages through the controller until no effect produces a follow-up.
async fn drain(controller: &mut UploadController, services: &Services, first: Message) {
    let mut queue = VecDeque::from([first]);
    while let Some(message) = queue.pop_front() {
        for effect in controller.update(message) {
            match effect {
                Effect::Notify { severity, message } => match severity {
                    Severity::Error => eprintln!("[CLIENT][ERROR] {}", message),
                    _ => println!("[CLIENT] {}", message),
                },
                // timers and dialogs only matter on screen
                Effect::ExpireToast { .. } | Effect::RevealConfidence { .. } | Effect::OpenFileDialog { .. } => {}
                other => {
                    if let Some(next) = dispatcher::run(other, services.clone()).await {
                        queue.push_back(next);
                    }
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let mut args = std::env::args().skip(1);
    let Some(image) = args.next() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    let want_report = args.any(|a| a == "--report");

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    ClassifierLogger::init(&log_level);
    let config = ClientConfig::from_env();
    let services = Services::from_config(&config)?;
    let mut controller = UploadController::new();

    drain(&mut controller, &services, Message::FilePicked(Some(PathBuf::from(image)))).await;
    if controller.ui_state != UiState::PreviewReady {
        std::process::exit(1);
    }

    drain(&mut controller, &services, Message::ClassifyRequested).await;
    let Some(rendered) = controller.rendered.clone().filter(|_| controller.ui_state == UiState::ResultReady) else {
        std::process::exit(1);
    };

    println!("[RESULT] {} ({})", rendered.label, rendered.confidence_text);
    println!("[RESULT] {}", rendered.analyzed_on);
    for (name, score) in &rendered.top_classes {
        println!("  {:<12} {}%", name, score);
    }

    if want_report {
        drain(&mut controller, &services, Message::DownloadReportRequested).await;
        if controller.last_notice_failed() {
            std::process::exit(1);
        }
    }
    Ok(())
}
