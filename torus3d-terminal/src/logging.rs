/// Log filter setup for the binary
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset, empty or unparsable. Logs share
/// the terminal with the animation.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_DIRECTIVE`]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Filter from the process environment
pub fn env_log_filter() -> EnvFilter {
    log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_level_from_environment_is_kept() {
        let filter = log_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_target_directives_are_kept() {
        let filter = log_filter(Some("warn,torus3d_terminal=trace"));
        let rendered = filter.to_string();
        assert!(rendered.contains("torus3d_terminal=trace"));
        assert!(rendered.contains("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_fallback_is_warn() {
        assert_eq!(log_filter(None).to_string(), "warn");
        assert_eq!(log_filter(Some("  ")).to_string(), "warn");
        assert_eq!(log_filter(Some("torus3d=loud")).to_string(), "warn");
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }
}
