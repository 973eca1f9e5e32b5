use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

const API_KEY_VAR: &str = "BACKOFFICE_API_KEY";
const PROFILE_URL_VAR: &str = "BACKOFFICE_PROFILE_URL";

/// Load `config.toml` once, apply environment overrides, and cache the
/// result. A missing or unparseable file yields the defaults.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config; using defaults");
                AppConfig::default()
            }),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "Config not found; using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        tracing::info!(
            demo_users = config.demo_users.len(),
            remote_profiles = !config.identity.profile_base_url.is_empty(),
            "Configuration loaded"
        );
        config
    })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Secrets come from the environment rather than the checked-in file.
/// Empty values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
    if let Some(key) = present(API_KEY_VAR) {
        config.identity.api_key = key;
    }
    if let Some(url) = present(PROFILE_URL_VAR) {
        config.identity.profile_base_url = url;
    }
}
