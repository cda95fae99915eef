use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Default filter for a given debug setting. `RUST_LOG` always takes precedence.
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    level.into()
}

/// Composes multiple layers into a `tracing` subscriber that writes bunyan-formatted JSON to
/// `sink`.
///
/// The sink is generic so tests can pass `std::io::sink` to discard output. The return type is
/// `impl Subscriber` to avoid spelling out the layered type.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default().with(env_filter).with(JsonStorageLayer).with(formatting_layer)
}

/// Registers `subscriber` as the global default and redirects `log` records into it. Should only
/// be called once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
