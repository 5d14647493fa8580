use tracing_subscriber::EnvFilter;

pub(crate) fn init_logging() {
    // Init logging using tracing subscriber with ENV and some backup default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("price_feed=info,casino_platform=info")),
        )
        .with_target(false)
        .without_time()
        .init();
}
