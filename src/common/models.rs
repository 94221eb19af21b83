// Data model shared between the GUI client and the CLI
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// A file chosen by the user, before its bytes are read.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Media type derived from the extension; `None` when unrecognized.
    pub media_type: Option<String>,
    pub size: u64,
}

/// The image currently held by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Arc<[u8]>,
}

/// Wire format returned by `POST /classify`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: String,
    /// Already separated label, when the server exposes one.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub all_classes_score: BTreeMap<String, f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Raw `result` string as sent by the server.
    pub result: String,
    pub label: Option<String>,
    pub confidence: f64,
    pub timestamp: String,
    pub filename: String,
    pub all_classes_score: BTreeMap<String, f64>,
}

const LABEL_PREFIX: &str = "The image is Likely ";
const CONFIDENCE_MARKER: &str = ". Confidence:";

impl ClassificationResult {
    /// Primary label with the server's sentence template removed.
    pub fn primary_label(&self) -> String {
        if let Some(label) = self.label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            return label.to_string();
        }
        let raw = self.result.trim();
        let without_prefix = raw.strip_prefix(LABEL_PREFIX).unwrap_or(raw);
        // the server formats the confidence with two decimals, so cut at the marker
        // instead of matching the exact number
        match without_prefix.find(CONFIDENCE_MARKER) {
            Some(idx) => without_prefix[..idx].trim().to_string(),
            None => without_prefix.trim_end_matches('.').trim().to_string(),
        }
    }

    /// Per-class scores sorted by descending confidence.
    pub fn ranked_scores(&self) -> Vec<(String, f64)> {
        let mut scores: Vec<(String, f64)> = self
            .all_classes_score
            .iter()
            .map(|(name, score)| (name.clone(), *score))
            .collect();
        scores.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scores
    }
}

impl From<ClassifyResponse> for ClassificationResult {
    fn from(resp: ClassifyResponse) -> Self {
        Self {
            result: resp.result,
            label: resp.label,
            confidence: resp.confidence,
            timestamp: resp.timestamp,
            filename: resp.filename,
            all_classes_score: resp.all_classes_score,
        }
    }
}

/// JSON document written by "Download Report".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub timestamp: String,
    pub filename: String,
    pub primary_classification: String,
    pub confidence: f64,
    pub all_classifications: BTreeMap<String, f64>,
}

impl From<&ClassificationResult> for ClassificationReport {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            timestamp: result.timestamp.clone(),
            filename: result.filename.clone(),
            primary_classification: result.primary_label(),
            confidence: result.confidence,
            all_classifications: result.all_classes_score.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(raw: &str, label: Option<&str>) -> ClassificationResult {
        ClassificationResult {
            result: raw.to_string(),
            label: label.map(str::to_string),
            confidence: 87.5,
            timestamp: "2025-03-01T10:15:00".to_string(),
            filename: "ship.jpg".to_string(),
            all_classes_score: BTreeMap::new(),
        }
    }

    #[test]
    fn strips_server_sentence_template() {
        let r = result_with("The image is Likely Cargo. Confidence: 87.50%", None);
        assert_eq!(r.primary_label(), "Cargo");
    }

    #[test]
    fn structured_label_wins_over_sentence() {
        let r = result_with("The image is Likely Cargo. Confidence: 87.50%", Some("Tankers"));
        assert_eq!(r.primary_label(), "Tankers");
    }

    #[test]
    fn untemplated_result_is_kept() {
        let r = result_with("Military", None);
        assert_eq!(r.primary_label(), "Military");
    }

    #[test]
    fn ranked_scores_are_descending() {
        let mut r = result_with("", None);
        r.all_classes_score = BTreeMap::from([
            ("Fishing".to_string(), 4.3),
            ("Cargo".to_string(), 87.5),
            ("Tanker".to_string(), 8.2),
        ]);
        let names: Vec<_> = r.ranked_scores().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Cargo", "Tanker", "Fishing"]);
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let resp: ClassifyResponse =
            serde_json::from_str(r#"{"success": false, "error": "Analysis failed: boom"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Analysis failed: boom"));
        assert!(resp.all_classes_score.is_empty());
    }
}
