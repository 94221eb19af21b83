use chrono::Utc;
use log::{error, info};
use std::io::Write;

/// Logger setup shared by the GUI and the CLI.
pub struct ClassifierLogger;

impl ClassifierLogger {
    /// Initializes env_logger; `LOG_LEVEL` seeds `RUST_LOG` when the latter is unset.
    pub fn init(log_level: &str) {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filters) => builder.parse_filters(&filters),
            Err(_) => builder.parse_filters(log_level),
        };
        builder
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}:{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .try_init()
            .ok();

        info!("Ship classifier logger initialized");
    }

    /// Logs panics before the default hook runs. Nothing is shown to the user.
    pub fn install_panic_hook() {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            error!("Unhandled panic: {}", panic_info);
            default_hook(panic_info);
        }));
    }
}
