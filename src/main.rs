//! # Upstream Stub
//!
//! A two-route HTTP server used as a stand-in upstream when testing proxies and clients. The
//! library crate documents configuration and how to embed the server in other test suites.
use std::process::ExitCode;
use upstream_stub::{config, error::StartupError, startup, telemetry};

/// Entrypoint for the application.
#[tokio::main]
async fn main() -> ExitCode {
    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Stub server stopped");
            eprintln!("upstream-stub: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> Result<(), StartupError> {
    let configuration = config::get_configuration()?;
    let application = configuration.application;

    let subscriber = telemetry::get_subscriber(
        "upstream-stub".into(),
        telemetry::default_filter(application.debug),
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber);

    let listener = startup::bind(&application)?;
    tracing::info!(
        address = %application.address(),
        debug = application.debug,
        "Listening"
    );
    startup::run(listener, application.debug)?.await?;
    Ok(())
}
