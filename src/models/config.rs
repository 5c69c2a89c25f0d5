use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Outgoing mail settings used for enquiry notifications.
#[derive(Clone, Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Sender address of the notification emails.
    pub from_address: String,
    /// Business inbox that receives new enquiries.
    pub notification_email: String,
    /// Upper bound on one SMTP exchange, in seconds.
    #[serde(default = "default_smtp_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_timeout_secs() -> u64 {
    10
}

/// Configuration options specific to the booking service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory served under `/assets`, holding profile images.
    pub assets_dir: String,
    /// Shared secret for back-office endpoints. Empty disables them.
    #[serde(default)]
    pub operator_token: String,
    /// Notifications are logged instead of mailed when absent.
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
}

impl ServerConfig {
    /// Layered load: `config/default.yaml`, then `config/{app_env}.yaml`,
    /// then `APP_*` environment variables (`__` separates nested keys).
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
