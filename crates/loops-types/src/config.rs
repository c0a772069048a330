//! Configuration types for the Loops assistant.
//!
//! `AppConfig` represents the top-level `loops.toml`. Every section and field has
//! a default, so an empty file (or no file) yields a working configuration
//! pointed at OpenAI with the Loops Integrated brand profile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chat::DEFAULT_WINDOW;

/// Literal marker the model is told to prefix off-topic replies with.
pub const DEFAULT_SENTINEL: &str = "[OFF_TOPIC]";

/// Top-level configuration, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub brand: BrandProfile,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built marketing site; served as the fallback route
    /// when present.
    #[serde(default)]
    pub web_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: None,
        }
    }
}

/// Completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider_name")]
    pub provider_name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_provider_name() -> String {
    "openai".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.5
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider_name: default_provider_name(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
            api_key_env: default_api_key_env(),
        }
    }
}

/// Fixed brand facts embedded in the system directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfile {
    #[serde(default = "default_brand_name")]
    pub name: String,
    #[serde(default = "default_working_hours")]
    pub working_hours: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_services")]
    pub services: Vec<String>,
    #[serde(default = "default_contact")]
    pub contact: String,
}

fn default_brand_name() -> String {
    "Loops Integrated".to_string()
}

fn default_working_hours() -> String {
    "Mon–Fri, 9 AM–6 PM".to_string()
}

fn default_location() -> String {
    "Colombo 03".to_string()
}

fn default_services() -> Vec<String> {
    [
        "Digital marketing",
        "creative strategy",
        "performance marketing",
        "content creation",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_contact() -> String {
    "hello@loops.lk / +94 77 123 4567".to_string()
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            working_hours: default_working_hours(),
            location: default_location(),
            services: default_services(),
            contact: default_contact(),
        }
    }
}

/// Relay behaviour knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// How many recent messages are forwarded upstream.
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            sentinel: default_sentinel(),
        }
    }
}

/// How the classifier decides between English and Sinhala.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionPolicy {
    /// Sinhala iff the text contains a character from the Sinhala block.
    Strict,
    /// Strict check first, then a romanized-Sinhala word list.
    #[default]
    Romanized,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub policy: DetectionPolicy,
}

/// Where validated leads go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSinkKind {
    /// Record the lead in the structured log only.
    #[default]
    Log,
    /// POST the lead as JSON to `webhook_url`.
    Webhook,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub sink: ContactSinkKind,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

fn default_webhook_timeout_secs() -> u64 {
    10
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            sink: ContactSinkKind::default(),
            webhook_url: None,
            webhook_timeout_secs: default_webhook_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.relay.window, 10);
        assert_eq!(config.relay.sentinel, "[OFF_TOPIC]");
        assert_eq!(config.language.policy, DetectionPolicy::Romanized);
        assert_eq!(config.contact.sink, ContactSinkKind::Log);
        assert_eq!(config.brand.services.len(), 4);
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.brand.location, "Colombo 03");
    }

    #[test]
    fn test_app_config_deserialize_with_values() {
        let toml_str = r#"
[server]
port = 8080
web_dir = "site/dist"

[llm]
model = "gpt-4o"
temperature = 0.2

[brand]
name = "Acme"
services = ["SEO"]

[language]
policy = "strict"

[contact]
sink = "webhook"
webhook_url = "https://hooks.example.com/leads"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.web_dir, Some(PathBuf::from("site/dist")));
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.brand.name, "Acme");
        assert_eq!(config.brand.services, vec!["SEO".to_string()]);
        assert_eq!(config.brand.contact, "hello@loops.lk / +94 77 123 4567");
        assert_eq!(config.language.policy, DetectionPolicy::Strict);
        assert_eq!(config.contact.sink, ContactSinkKind::Webhook);
        assert_eq!(config.contact.webhook_timeout_secs, 10);
    }
}
