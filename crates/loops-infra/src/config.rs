//! Configuration loader for the Loops assistant.
//!
//! Reads `loops.toml` and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed, so a bare `loops serve` with
//! only `OPENAI_API_KEY` exported is a working setup.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use secrecy::SecretString;

use loops_types::config::AppConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "LOOPS_CONFIG";

const CONFIG_FILE_NAME: &str = "loops.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key not set: export {var} (or change llm.api_key_env)")]
    MissingApiKey { var: String },

    #[error("contact.sink = \"webhook\" requires contact.webhook_url")]
    MissingWebhookUrl,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Resolve where `loops.toml` lives.
///
/// Priority:
/// 1. An explicit path (the `--config` flag)
/// 2. `LOOPS_CONFIG`
/// 3. `{config_dir}/loops/loops.toml` (e.g. `~/.config/loops/loops.toml`)
/// 4. `loops.toml` in the working directory
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_config_path_from(explicit, std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

fn resolve_config_path_from(
    explicit: Option<PathBuf>,
    env_value: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(value);
    }
    match config_dir {
        Some(dir) => dir.join("loops").join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_app_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Read the completion API key from the environment variable `var`.
///
/// An unset, empty or non-Unicode variable is treated as missing.
pub fn load_api_key(var: &str) -> Result<SecretString, ConfigError> {
    api_key_from_value(var, std::env::var(var).ok())
}

fn api_key_from_value(var: &str, value: Option<String>) -> Result<SecretString, ConfigError> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(key) => Ok(SecretString::from(key)),
        None => Err(ConfigError::MissingApiKey {
            var: var.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    use loops_types::config::{ContactSinkKind, DetectionPolicy};

    #[tokio::test]
    async fn load_app_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_app_config(&tmp.path().join("loops.toml")).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.relay.window, 10);
        assert_eq!(config.relay.sentinel, "[OFF_TOPIC]");
    }

    #[tokio::test]
    async fn load_app_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("loops.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
port = 8080

[llm]
model = "gpt-4o"
temperature = 0.2

[brand]
name = "Acme Studio"

[language]
policy = "strict"

[contact]
sink = "webhook"
webhook_url = "https://hooks.example.com/leads"
"#,
        )
        .await
        .unwrap();

        let config = load_app_config(&path).await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.brand.name, "Acme Studio");
        assert_eq!(config.brand.location, "Colombo 03");
        assert_eq!(config.language.policy, DetectionPolicy::Strict);
        assert_eq!(config.contact.sink, ContactSinkKind::Webhook);
        assert_eq!(
            config.contact.webhook_url.as_deref(),
            Some("https://hooks.example.com/leads")
        );
    }

    #[tokio::test]
    async fn load_app_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("loops.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_app_config(&path).await;
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.language.policy, DetectionPolicy::Romanized);
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config_path_from(
            Some(PathBuf::from("/tmp/explicit.toml")),
            Some(OsString::from("/tmp/env.toml")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(path, PathBuf::from("/tmp/explicit.toml"));
    }

    #[test]
    fn env_path_beats_config_dir() {
        let path = resolve_config_path_from(
            None,
            Some(OsString::from("/tmp/env.toml")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(path, PathBuf::from("/tmp/env.toml"));
    }

    #[test]
    fn config_dir_is_the_default() {
        let path = resolve_config_path_from(
            None,
            Some(OsString::new()),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(path, PathBuf::from("/home/u/.config/loops/loops.toml"));
        assert_eq!(
            resolve_config_path_from(None, None, None),
            PathBuf::from("loops.toml")
        );
    }

    #[test]
    fn api_key_present_is_trimmed() {
        let key = api_key_from_value("OPENAI_API_KEY", Some(" sk-abc \n".into())).unwrap();
        assert_eq!(key.expose_secret(), "sk-abc");
    }

    #[test]
    fn api_key_missing_or_blank_is_error() {
        for value in [None, Some(String::new()), Some("   ".into())] {
            let err = api_key_from_value("OPENAI_API_KEY", value).unwrap_err();
            assert!(err.to_string().contains("OPENAI_API_KEY"));
        }
    }

    #[test]
    fn load_api_key_reads_unset_variable_as_missing() {
        let err = load_api_key("LOOPS_TEST_UNSET_API_KEY_7F3A").unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { var } if var == "LOOPS_TEST_UNSET_API_KEY_7F3A"));
    }
}
