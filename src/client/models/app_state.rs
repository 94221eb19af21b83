use crate::client::gui::views::toast::{Severity, Toast};
use crate::client::models::messages::{Effect, Message};
use crate::client::models::ui_state::UiState;
use crate::client::services::report_service;
use crate::common::error::ClientError;
use crate::common::models::{ClassificationResult, DeclaredFile, SelectedImage};
use crate::common::validation;
use crate::utils::format::{format_percent, format_timestamp, round2};
use iced::widget::image::Handle;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_millis(4000);
pub const CONFIDENCE_REVEAL_DELAY: Duration = Duration::from_millis(300);
pub const TOP_CLASSES: usize = 5;

/// Display data derived from a [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub label: String,
    pub confidence: f64,
    pub confidence_text: String,
    pub analyzed_on: String,
    /// Top entries, highest first, rounded to two decimals.
    pub top_classes: Vec<(String, f64)>,
}

impl RenderedResult {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let top_classes = result
            .ranked_scores()
            .into_iter()
            .take(TOP_CLASSES)
            .map(|(name, score)| (name, round2(score)))
            .collect();
        Self {
            label: result.primary_label(),
            confidence: result.confidence,
            confidence_text: format_percent(result.confidence),
            analyzed_on: format!("Analyzed on {}", format_timestamp(&result.timestamp)),
            top_classes,
        }
    }
}

/// Owns every piece of interactive state and is the only place it changes.
#[derive(Debug, Default)]
pub struct UploadController {
    pub ui_state: UiState,
    pub selected: Option<SelectedImage>,
    pub preview: Option<Handle>,
    pub last_result: Option<ClassificationResult>,
    pub rendered: Option<RenderedResult>,
    /// Width of the confidence bar; stays at zero until the deferred reveal.
    pub confidence_fill: f32,
    /// Set together with the fill; the percentage label is hidden until then.
    pub confidence_revealed: bool,
    /// Value of the file input, cleared on reset.
    pub file_input: Option<PathBuf>,
    pub in_flight: bool,
    pub drag_hover: bool,
    pub toast: Option<Toast>,
    /// File accepted but not yet read; classification waits for it.
    pending_load: Option<PathBuf>,
    resume_state: UiState,
    load_token: u64,
    reveal_token: u64,
    toast_seq: u64,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::NoOp => Vec::new(),
            Message::BrowseRequested => {
                if self.ui_state == UiState::Submitting {
                    return Vec::new();
                }
                let start_dir = self
                    .file_input
                    .as_ref()
                    .and_then(|p| p.parent())
                    .map(|p| p.to_path_buf());
                vec![Effect::OpenFileDialog { start_dir }]
            }
            Message::FilePicked(Some(path)) => self.choose_path(path),
            Message::FilePicked(None) => Vec::new(),
            Message::FileInspected(Ok(file)) => self.accept_file(file),
            Message::FileInspected(Err(e)) => self.notify(format!("Could not open file: {}", e), Severity::Error),
            Message::PreviewLoaded { token, result } => self.preview_loaded(token, result),
            Message::DragEntered => {
                self.drag_hover = true;
                Vec::new()
            }
            Message::DragLeft { within_target } => {
                if !within_target {
                    self.drag_hover = false;
                }
                Vec::new()
            }
            Message::FileDropped(path) => {
                // later files of the same drop arrive after the affordance was consumed
                if !self.drag_hover {
                    debug!("Ignoring extra dropped file {}", path.display());
                    return Vec::new();
                }
                self.drag_hover = false;
                self.choose_path(path)
            }
            Message::ClassifyRequested => self.classify(),
            Message::ClassifyFinished(outcome) => self.classify_finished(outcome),
            Message::ConfidenceRevealed { token } => {
                if token == self.reveal_token {
                    if let Some(rendered) = &self.rendered {
                        self.confidence_fill = rendered.confidence.clamp(0.0, 100.0) as f32;
                        self.confidence_revealed = true;
                    }
                }
                Vec::new()
            }
            Message::ResetRequested => self.reset(),
            Message::DownloadReportRequested => self.download_report(),
            Message::ReportSaved(Ok(path)) => {
                info!("Report saved to {}", path.display());
                self.notify("Report downloaded successfully!", Severity::Success)
            }
            Message::ReportSaved(Err(e)) => self.notify(format!("Error: {}", e), Severity::Error),
            Message::ToastExpired { id } => {
                if self.toast.as_ref().is_some_and(|t| t.id == id) {
                    self.toast = None;
                }
                Vec::new()
            }
        }
    }

    fn choose_path(&mut self, path: PathBuf) -> Vec<Effect> {
        if self.ui_state == UiState::Submitting {
            return self.notify("Please wait for the current classification to finish", Severity::Info);
        }
        vec![Effect::InspectFile(path)]
    }

    /// Validates `file` and starts reading it. Rejections leave all state as is.
    pub fn accept_file(&mut self, file: DeclaredFile) -> Vec<Effect> {
        if self.ui_state == UiState::Submitting {
            return self.notify("Please wait for the current classification to finish", Severity::Info);
        }
        if let Err(e) = validation::validate(&file) {
            warn!("Rejected {}: {}", file.file_name, e);
            return self.notify(e.to_string(), Severity::Error);
        }
        self.load_token += 1;
        self.pending_load = Some(file.path.clone());
        vec![Effect::ReadImage { token: self.load_token, file }]
    }

    fn preview_loaded(&mut self, token: u64, result: Result<SelectedImage, ClientError>) -> Vec<Effect> {
        if token != self.load_token || self.ui_state == UiState::Submitting {
            debug!("Discarding stale preview load {}", token);
            return Vec::new();
        }
        let path = self.pending_load.take();
        match result {
            Ok(image) => {
                info!("Loaded {} ({} bytes, {})", image.file_name, image.size, image.media_type);
                self.preview = Some(Handle::from_memory(image.bytes.to_vec()));
                self.selected = Some(image);
                self.file_input = path;
                self.clear_result();
                self.ui_state = UiState::PreviewReady;
                self.notify("Image loaded successfully! Click \"Classify\" to analyze.", Severity::Success)
            }
            Err(e) => self.notify(format!("Could not read image: {}", e), Severity::Error),
        }
    }

    /// Starts one submission; every other call is a guarded no-op.
    pub fn classify(&mut self) -> Vec<Effect> {
        if self.in_flight || !self.ui_state.can_classify() {
            return Vec::new();
        }
        if self.pending_load.is_some() {
            return self.notify("Please wait for the image to finish loading", Severity::Info);
        }
        let Some(image) = self.selected.clone() else {
            return Vec::new();
        };
        self.in_flight = true;
        self.resume_state = self.ui_state;
        self.ui_state = UiState::Submitting;
        vec![Effect::Submit(image)]
    }

    fn classify_finished(&mut self, outcome: Result<ClassificationResult, ClientError>) -> Vec<Effect> {
        if !self.in_flight {
            return Vec::new();
        }
        self.in_flight = false;
        match outcome {
            Ok(result) => {
                let mut effects = self.render_result(&result);
                self.last_result = Some(result);
                self.ui_state = UiState::ResultReady;
                effects.extend(self.notify("Classification completed successfully!", Severity::Success));
                effects
            }
            Err(e) => {
                self.ui_state = self.resume_state;
                self.notify(format!("Error: {}", e), Severity::Error)
            }
        }
    }

    /// Derives the result panel and schedules the confidence bar animation.
    pub fn render_result(&mut self, result: &ClassificationResult) -> Vec<Effect> {
        self.rendered = Some(RenderedResult::from_result(result));
        self.confidence_fill = 0.0;
        self.confidence_revealed = false;
        self.reveal_token += 1;
        vec![Effect::RevealConfidence { token: self.reveal_token, after: CONFIDENCE_REVEAL_DELAY }]
    }

    pub fn reset(&mut self) -> Vec<Effect> {
        if !self.ui_state.can_reset() {
            return Vec::new();
        }
        self.selected = None;
        self.preview = None;
        self.file_input = None;
        self.pending_load = None;
        self.load_token += 1;
        self.clear_result();
        self.ui_state = UiState::Empty;
        self.notify("Ready for new image upload", Severity::Info)
    }

    pub fn download_report(&mut self) -> Vec<Effect> {
        if self.ui_state == UiState::Submitting {
            return Vec::new();
        }
        let Some(result) = self.last_result.as_ref().filter(|_| self.ui_state == UiState::ResultReady) else {
            return self.notify("No results to download", Severity::Error);
        };
        match report_service::render_report(result) {
            Ok(contents) => {
                let file_name = report_service::report_file_name(chrono::Utc::now().timestamp_millis());
                vec![Effect::SaveReport { file_name, contents }]
            }
            Err(e) => self.notify(format!("Error: {}", e), Severity::Error),
        }
    }

    /// Replaces the current toast; the expiry only clears this exact toast.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Vec<Effect> {
        self.toast_seq += 1;
        let toast = Toast { id: self.toast_seq, severity, message: message.into() };
        let effects = vec![
            Effect::Notify { severity, message: toast.message.clone() },
            Effect::ExpireToast { id: toast.id, after: TOAST_DURATION },
        ];
        self.toast = Some(toast);
        effects
    }

    /// True when the most recent notification reported an error.
    pub fn last_notice_failed(&self) -> bool {
        self.toast.as_ref().is_some_and(|t| t.severity == Severity::Error)
    }

    fn clear_result(&mut self) {
        self.last_result = None;
        self.rendered = None;
        self.confidence_fill = 0.0;
        self.confidence_revealed = false;
    }
}
