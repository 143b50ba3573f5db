// Logging initialization for embedding binaries and examples.
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_sets_global_default() {
        init_logging(false);
        // A second subscriber cannot be installed once ours is the
        // global default.
        assert!(
            tracing::subscriber::set_global_default(tracing_subscriber::registry()).is_err()
        );
    }
}
