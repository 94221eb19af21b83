use crate::client::config::ClientConfig;
use crate::client::models::messages::{Effect, Message};
use crate::client::services::classify_service::ClassifyService;
use crate::client::services::{file_loader, report_service};
use crate::common::validation::ALLOWED_EXTENSIONS;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything an effect needs to run, cheap to clone into futures.
#[derive(Debug, Clone)]
pub struct Services {
    pub classifier: Arc<ClassifyService>,
    pub report_dir: PathBuf,
}

impl Services {
    pub fn new(classifier: ClassifyService, report_dir: PathBuf) -> Self {
        Self { classifier: Arc::new(classifier), report_dir }
    }

    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self::new(ClassifyService::from_config(config)?, config.report_dir.clone()))
    }
}

/// Runs one effect and reports its outcome as the next message, if any.
pub async fn run(effect: Effect, services: Services) -> Option<Message> {
    match effect {
        Effect::OpenFileDialog { start_dir } => {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Select a ship image")
                .add_filter("Images", &ALLOWED_EXTENSIONS);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            let picked = dialog.pick_file().await.map(|handle| handle.path().to_path_buf());
            Some(Message::FilePicked(picked))
        }
        Effect::InspectFile(path) => Some(Message::FileInspected(file_loader::inspect(&path).await)),
        Effect::ReadImage { token, file } => Some(Message::PreviewLoaded {
            token,
            result: file_loader::read_image(file).await,
        }),
        Effect::Submit(image) => Some(Message::ClassifyFinished(services.classifier.classify(&image).await)),
        Effect::RevealConfidence { token, after } => {
            tokio::time::sleep(after).await;
            Some(Message::ConfidenceRevealed { token })
        }
        Effect::SaveReport { file_name, contents } => Some(Message::ReportSaved(
            report_service::save_report(&services.report_dir, &file_name, &contents).await,
        )),
        Effect::ExpireToast { id, after } => {
            tokio::time::sleep(after).await;
            Some(Message::ToastExpired { id })
        }
        Effect::Notify { severity, message } => {
            log::debug!("[{}] {}", severity.label(), message);
            None
        }
    }
}
