const DEFAULT_FILTER: &str = "warn";

/// Picks the log filter: the command line flag, then `RUST_LOG`, then `warn`.
fn resolve_filter(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global logger. Logs go to stderr so the trace on stdout is
/// never interleaved with them.
pub fn init_logging(flag: Option<&str>) {
    let filter = resolve_filter(flag, std::env::var("RUST_LOG").ok());

    env_logger::Builder::new()
        .parse_filters(&filter)
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("logging initialized with filter {filter:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(resolve_filter(Some("debug"), Some("info".into())), "debug");
        assert_eq!(resolve_filter(None, Some("info".into())), "info");
        assert_eq!(resolve_filter(None, None), "warn");
    }
}
