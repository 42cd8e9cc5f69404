use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is loaded at most once per process; later calls are no-ops.
/// A missing `.env` file is not an error.
pub fn ensure_dotenv_loaded() {
    INIT_DOTENV.get_or_init(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the application configuration.
///
/// Sources are layered, later sources overriding earlier ones:
/// 1. `config/default` (any supported format, optional)
/// 2. `config/{RUN_ENV}` when the `RUN_ENV` variable is set (optional)
/// 3. Environment variables with the `STAYSYNC` prefix and `__` separator,
///    e.g. `STAYSYNC__API__BASE_URL` maps to `api.base_url`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let mut builder =
        Config::builder().add_source(File::with_name("config/default").required(false));

    if let Ok(run_env) = env::var("RUN_ENV") {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", run_env)).required(false));
    }

    builder = builder.add_source(Environment::with_prefix("STAYSYNC").separator("__"));

    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_config_with_defaults() {
        let raw = r#"
            [server]
            host = "127.0.0.1"
            port = 8086

            [api]
            base_url = "http://localhost:8080"
        "#;
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8086);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(config.api.timeout_secs.is_none());
        assert!(config.auth.is_none());
        assert_eq!(config.reconciler.poll_interval_secs, 180);
    }

    #[test]
    fn deserializes_full_config() {
        let raw = r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [api]
            base_url = "https://api.example.com"
            timeout_secs = 10

            [auth]
            email = "agent@example.com"
            password = "secret"

            [reconciler]
            poll_interval_secs = 60
        "#;
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.auth.as_ref().unwrap().email, "agent@example.com");
        assert_eq!(config.reconciler.poll_interval_secs, 60);
    }
}
