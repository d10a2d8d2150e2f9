use log::LevelFilter;
use std::env;

/// Filter used when `RUST_LOG` is unset or blank.
const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` directives, or the default filter.
fn rust_log_filters() -> String {
    env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Stderr logger honoring env_logger directives such as
/// `warn,otu_dashboard=debug`.
fn console_builder(filters: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filters).format_timestamp_secs();
    builder
}

/// Initialize the stderr logger for console commands.
///
/// Directives come from `RUST_LOG`. Calling this twice is harmless.
pub fn init_console_logger() {
    let _ = console_builder(&rust_log_filters()).try_init();
}

/// Initialize a logger that stays silent.
///
/// Used while the terminal dashboard owns the screen, where stderr output
/// would tear the alternate screen.
pub fn init_quiet_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    // A module directive only raises verbosity for that module.
    fn test_module_directive_stays_scoped() {
        let logger = console_builder("otu_dashboard=debug").build();
        assert!(enabled(&logger, "otu_dashboard::provider", Level::Debug));
        assert!(!enabled(&logger, "reqwest::connect", Level::Debug));
    }

    #[test]
    fn test_global_level_with_module_override() {
        let logger = console_builder("warn,otu_dashboard=debug").build();
        assert!(enabled(&logger, "otu_dashboard::dashboard", Level::Debug));
        assert!(enabled(&logger, "hyper::client", Level::Warn));
        assert!(!enabled(&logger, "hyper::client", Level::Info));
    }

    #[test]
    fn test_default_filter_is_info() {
        let logger = console_builder(DEFAULT_FILTER).build();
        assert!(enabled(&logger, "otu_dashboard", Level::Info));
        assert!(!enabled(&logger, "otu_dashboard", Level::Debug));
    }
}
