use crate::common::error::ClientError;
use crate::common::models::{ClassificationReport, ClassificationResult};
use std::path::{Path, PathBuf};

pub fn report_file_name(epoch_millis: i64) -> String {
    format!("ship_classification_report_{}.json", epoch_millis)
}

/// Pretty JSON (two space indent) of the report for `result`.
pub fn render_report(result: &ClassificationResult) -> Result<String, ClientError> {
    let report = ClassificationReport::from(result);
    serde_json::to_string_pretty(&report).map_err(|e| ClientError::Io(e.to_string()))
}

pub async fn save_report(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ClientError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    tokio::fs::write(&path, contents.as_bytes()).await?;
    log::info!("Report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> ClassificationResult {
        ClassificationResult {
            result: "The image is Likely Cargo. Confidence: 87.50%".to_string(),
            label: None,
            confidence: 87.5,
            timestamp: "2025-03-01T10:15:00".to_string(),
            filename: "ship_20250301_101500_ab12cd34.jpg".to_string(),
            all_classes_score: BTreeMap::from([
                ("Cargo".to_string(), 87.5),
                ("Tanker".to_string(), 8.2),
                ("Fishing".to_string(), 4.3),
            ]),
        }
    }

    #[test]
    fn file_name_pattern() {
        assert_eq!(report_file_name(1700000000123), "ship_classification_report_1700000000123.json");
    }

    #[test]
    fn report_round_trips_scores() {
        let json = render_report(&sample()).unwrap();
        assert!(json.contains("\n  \"timestamp\""));
        let report: ClassificationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.confidence, 87.5);
        assert_eq!(report.all_classifications, sample().all_classes_score);
        assert_eq!(report.primary_classification, "Cargo");
    }

    #[tokio::test]
    async fn save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let path = save_report(&target, "r.json", "{}").await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }
}
