use once_cell::sync::Lazy;
use std::net::TcpListener;
use upstream_stub::{startup, telemetry};

// Installed once per test binary; logs are discarded unless `TEST_LOG` is set, in which case
// `TEST_LOG=1 cargo test | bunyan` shows them.
static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = telemetry::default_filter(false);
    match std::env::var_os("TEST_LOG") {
        Some(_) => telemetry::init_subscriber(telemetry::get_subscriber(
            "upstream-stub-test".into(),
            filter,
            std::io::stdout,
        )),
        None => telemetry::init_subscriber(telemetry::get_subscriber(
            "upstream-stub-test".into(),
            filter,
            std::io::sink,
        )),
    }
});

/// A stub served in the background on an ephemeral loopback port.
pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    let server = startup::run(listener, false).expect("Failed to build server");
    tokio::spawn(server);

    TestApp { address }
}
