use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::Path;

/// Port the stub listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8081;

/// Bind address used when nothing else is configured: all IPv4 interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// All settings for the server. There is only one section since the stub has no backing
/// services.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// Application settings.
    pub application: ApplicationSettings,
}

/// Application settings.
#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    /// The port number on which the application will listen.
    pub port: u16,

    /// The hostname or IP address where the application will run.
    ///
    /// `0.0.0.0` listens on every interface, `127.0.0.1` keeps the stub local to the machine.
    pub host: String,

    /// Verbose diagnostics: debug-level logs and request headers recorded in spans. Never
    /// allowed in production.
    #[serde(default)]
    pub debug: bool,
}

impl ApplicationSettings {
    /// `host:port` as accepted by `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Based on the `APP_ENVIRONMENT` environment variable, reads the corresponding configuration file
/// from `./config` and returns the settings. `APP_`-prefixed variables override file values, e.g.
/// `APP_APPLICATION__PORT=9000`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let config_dir = base_path.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    load_settings(&config_dir, environment, environment_source())
}

/// The `APP_` environment variable source used by [`get_configuration`].
pub fn environment_source() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Layers the built-in defaults, `base.toml`, the environment-specific file and `env` (in that
/// order of increasing priority), then validates the result. Missing files are skipped.
pub fn load_settings(
    config_dir: &Path,
    environment: Environment,
    env: config::Environment,
) -> Result<Settings, ConfigError> {
    let environment_filename = format!("{}.toml", environment.as_str());

    let settings = Config::builder()
        .set_default("application.host", DEFAULT_HOST)?
        .set_default("application.port", i64::from(DEFAULT_PORT))?
        .set_default("application.debug", false)?
        .add_source(File::from(config_dir.join("base.toml")).required(false))
        .add_source(File::from(config_dir.join(environment_filename)).required(false))
        .add_source(env)
        .build()?;
    let settings: Settings = settings.try_deserialize()?;

    if settings.application.debug && matches!(environment, Environment::Production) {
        return Err(ConfigError::Message(
            "application.debug must not be enabled in the production environment".into(),
        ));
    }

    Ok(settings)
}

/// The possible runtime environments for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Production environment.
    Production,
}

impl Environment {
    /// Returns the environment as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Must be `local` or `production`"
            )),
        }
    }
}
