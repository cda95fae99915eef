use std::io;

/// Failures that stop the stub before (or while) it serves requests. `main` maps every variant to
/// a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to read configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to bind {address} (port {port}): {source}")]
    Bind {
        address: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] hyper::Error),
}
