use log::{info, warn};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:5000";
const CLASSIFY_PATH: &str = "classify";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the classify endpoint.
    pub classify_endpoint: Url,
    pub request_timeout: Duration,
    pub report_dir: PathBuf,
    pub log_level: String,
}

impl ClientConfig {
    /// Reads the process environment; callers load `.env` first.
    pub fn from_env() -> Self {
        let base = env::var("CLASSIFIER_URL").unwrap_or_else(|_| DEFAULT_CLASSIFIER_URL.to_string());
        let classify_endpoint = endpoint_from_base(&base).unwrap_or_else(|e| {
            warn!("Invalid CLASSIFIER_URL '{}': {}, falling back to {}", base, e, DEFAULT_CLASSIFIER_URL);
            endpoint_from_base(DEFAULT_CLASSIFIER_URL).expect("default classifier URL is valid")
        });

        let report_dir = env::var("REPORT_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("reports"));

        let config = Self {
            classify_endpoint,
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(30),
            ),
            report_dir,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        info!("Client configuration loaded:");
        info!("  Classify endpoint: {}", config.classify_endpoint);
        info!("  Request timeout: {}s", config.request_timeout.as_secs());
        info!("  Report directory: {}", config.report_dir.display());
        config
    }
}

/// Joins the classify path onto a base URL, keeping any path prefix the base has.
pub fn endpoint_from_base(base: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CLASSIFY_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_classify_path() {
        assert_eq!(
            endpoint_from_base("http://localhost:5000").unwrap().as_str(),
            "http://localhost:5000/classify"
        );
        assert_eq!(
            endpoint_from_base("https://ships.example.com/api").unwrap().as_str(),
            "https://ships.example.com/api/classify"
        );
    }

    #[test]
    fn from_env_reads_process_environment() {
        env::set_var("REQUEST_TIMEOUT_SECS", "7");
        env::set_var("REPORT_DIR", "/tmp/ship-reports");
        let config = ClientConfig::from_env();
        assert_eq!(config.request_timeout, Duration::from_secs(7));
        assert_eq!(config.report_dir, PathBuf::from("/tmp/ship-reports"));
    }

    #[test]
    fn rejects_garbage_base() {
        assert!(endpoint_from_base("not a url").is_err());
    }
}
