use crate::config::{LogFormat, LoggingConfig};
use crate::constants::LOG_LEVELS;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset. Unknown levels fall back to `info`.
fn filter_directive(level: Option<&str>, verbose: bool) -> String {
    let level = match level {
        _ if verbose => "debug",
        Some(level) if LOG_LEVELS.contains(&level) => level,
        _ => "info",
    };
    format!("wedding_site={},info", level)
}

fn default_filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)))
}

pub fn init_logger(config: &LoggingConfig, verbose: bool) {
    match config.format {
        LogFormat::Compact => init_cli_logger(config.level.as_deref(), verbose),
        LogFormat::Json => init_json_logger(config.level.as_deref(), verbose),
    }
}

pub fn init_cli_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one object per line for log shippers
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_configured_level() {
        assert_eq!(filter_directive(Some("warn"), false), "wedding_site=warn,info");
        assert_eq!(filter_directive(None, false), "wedding_site=info,info");
    }

    #[test]
    fn test_filter_directive_verbose_wins() {
        assert_eq!(filter_directive(Some("error"), true), "wedding_site=debug,info");
    }

    #[test]
    fn test_filter_directive_ignores_unknown_level() {
        assert_eq!(filter_directive(Some("loud"), false), "wedding_site=info,info");
        assert_eq!(filter_directive(Some("info,hyper=trace"), false), "wedding_site=info,info");
    }
}
