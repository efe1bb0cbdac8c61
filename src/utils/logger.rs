use chrono::Utc;
use log::info;
use std::io::Write;

/// Initialise env_logger with the `[time] [level] [file:line] msg` format.
///
/// `LOG_LEVEL` (default `info`) is used when `RUST_LOG` is not set.
pub fn init() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env = env_logger::Env::default().default_filter_or(level);

    let result = env_logger::Builder::from_env(env)
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
        .try_init();

    // A second init (tests, probe + gui in one process) keeps the first logger
    if result.is_ok() {
        info!("retiros busqueda logger initialized");
    }
}
