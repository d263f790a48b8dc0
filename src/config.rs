use std::path::PathBuf;

pub(crate) const CURRENCY_VAR: &str = "SPENDTRACK_CURRENCY";
pub(crate) const LOG_FILTER_VAR: &str = "SPENDTRACK_LOG";
pub(crate) const LOG_DIR_VAR: &str = "SPENDTRACK_LOG_DIR";

const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Leading symbol on every displayed amount.
    pub(crate) currency_symbol: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub(crate) log_filter: String,
    /// Where the TUI writes its log file. `None` when no data directory
    /// could be determined.
    pub(crate) log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank values fall back to defaults.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            currency_symbol: get(CURRENCY_VAR).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_dir: get(LOG_DIR_VAR).map(PathBuf::from).or_else(default_log_dir),
        }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "spendtrack", "SpendTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
}
