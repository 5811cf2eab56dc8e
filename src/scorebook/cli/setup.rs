use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SCOREBOOK_LOG";

/// Installs the stderr log subscriber.
///
/// `SCOREBOOK_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output with `--verbose`. Listings share stderr, so log lines are plain
/// text led by their level and never look like a `<pos> <id> <score>` line.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Config directory: the explicit one if given, else the platform default.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        ProjectDirs::from("com", "scorebook", "scorebook")
            .map(|dirs| dirs.config_dir().to_path_buf())
    })
}
