use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str =
    "http_api=debug,category_feature=debug,product_feature=debug,domain=debug,sqlx=warn";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the built-in directives. The `prod` environment type
/// switches to JSON lines for log shipping.
pub fn init_tracing(env_type: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let registry = tracing_subscriber::registry().with(filter);

    if env_type == "prod" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
