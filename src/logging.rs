use crate::config::Config;
use crate::constants::COMPONENT_NAME;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber filtered by the configured log level.
///
/// An unparseable level falls back to `info`. Calling this more than once is
/// harmless; later calls leave the existing subscriber in place.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok();

    if installed {
        info!(
            component = COMPONENT_NAME,
            log_level = %config.log_level,
            "Logging initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tolerates_repeat_calls_and_bad_levels() {
        let config = Config {
            log_level: "not a level!!".to_string(),
            timeout: 1,
        };
        init(&config);
        init(&Config::default());
    }
}
