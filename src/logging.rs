//! Logger initialization

use std::sync::Once;

static INIT: Once = Once::new();

/// Filter directives for a base level, keeping the GPU stack quieter than the app
pub fn filter_directives(level: &str) -> String {
    format!("{},wgpu_core=warn,wgpu_hal=warn,naga=warn", level)
}

/// Initialize the global logger once.
///
/// `RUST_LOG` wins over `level` when set. Later calls are ignored.
pub fn init_logging(level: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.parse_filters(&filter_directives(level)),
        };

        if builder.try_init().is_err() {
            log::warn!("Logger already set, keeping existing one");
        }
        log::debug!("logging initialized at {}", level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_keeps_base_level() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("debug,"));
        assert!(directives.contains("wgpu_core=warn"));
    }
}
