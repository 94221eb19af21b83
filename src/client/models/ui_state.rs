// Mutually exclusive display mode of the upload surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// Upload prompt.
    #[default]
    Empty,
    /// Preview plus the classify button.
    PreviewReady,
    /// Loading indicator.
    Submitting,
    /// Result panel.
    ResultReady,
}

impl UiState {
    pub fn can_classify(self) -> bool {
        matches!(self, UiState::PreviewReady | UiState::ResultReady)
    }

    pub fn can_reset(self) -> bool {
        matches!(self, UiState::PreviewReady | UiState::ResultReady)
    }
}
