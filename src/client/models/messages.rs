use crate::client::gui::views::toast::Severity;
use crate::common::error::ClientError;
use crate::common::models::{ClassificationResult, DeclaredFile, SelectedImage};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    NoOp,
    // File acquisition
    BrowseRequested,
    FilePicked(Option<PathBuf>),
    FileInspected(Result<DeclaredFile, ClientError>),
    PreviewLoaded { token: u64, result: Result<SelectedImage, ClientError> },
    // Drag and drop
    DragEntered,
    DragLeft { within_target: bool },
    FileDropped(PathBuf),
    // Classification
    ClassifyRequested,
    ClassifyFinished(Result<ClassificationResult, ClientError>),
    ConfidenceRevealed { token: u64 },
    // Toolbar actions
    ResetRequested,
    DownloadReportRequested,
    ReportSaved(Result<PathBuf, ClientError>),
    // Notifications
    ToastExpired { id: u64 },
}

/// Side effects requested by the controller; run by the dispatcher.
#[derive(Debug, Clone)]
pub enum Effect {
    OpenFileDialog { start_dir: Option<PathBuf> },
    InspectFile(PathBuf),
    ReadImage { token: u64, file: DeclaredFile },
    Submit(SelectedImage),
    RevealConfidence { token: u64, after: Duration },
    SaveReport { file_name: String, contents: String },
    ExpireToast { id: u64, after: Duration },
    /// Already displayed; the CLI prints it.
    Notify { severity: Severity, message: String },
}
