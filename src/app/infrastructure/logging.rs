use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "own_pad=info,OwnPad=info";

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!("tracing initialized");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_lib_and_bin_targets() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        let targets: Vec<&str> = DEFAULT_FILTER
            .split(',')
            .filter_map(|directive| directive.strip_suffix("=info"))
            .collect();
        assert_eq!(targets, vec!["own_pad", "OwnPad"]);
    }
}
