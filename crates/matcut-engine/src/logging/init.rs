use std::sync::Once;

/// Filter used when neither the config nor the environment sets one.
///
/// Quiet for dependencies, `info` for the matcut crates.
pub const DEFAULT_FILTER: &str = "warn,matcut_engine=info,matcut_studio=info";

/// Environment variable checked before `RUST_LOG`.
pub const FILTER_ENV: &str = "MATCUT_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax, e.g.
/// `"matcut_engine=trace"` to see every layout pass.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter: explicit config, then `MATCUT_LOG`, then
    /// `RUST_LOG`, then [`DEFAULT_FILTER`].
    fn filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var(FILTER_ENV).ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend for the `log` facade, once.
///
/// Later calls are ignored. An embedding host that already installed its own
/// logger keeps it; matcut records then flow into that logger.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter();
        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init();

        match installed {
            Ok(()) => log::debug!("matcut logging initialized with filter `{filter}`"),
            Err(_) => {
                log::warn!("host logger already installed; matcut filter `{filter}` not applied")
            }
        }
    });
}
