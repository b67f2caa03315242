//! Runtime Configuration
//!
//! Backend URL and log level. Defaults can be replaced at build time with
//! `TASK_MANAGER_API_URL`, and at page load with a `window.TASK_MANAGER_CONFIG`
//! object (`{ apiBaseUrl, logLevel }`) defined before the wasm bundle runs.

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";
const RUNTIME_CONFIG_GLOBAL: &str = "TASK_MANAGER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TASK_MANAGER_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Fields a page may override at runtime
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigOverrides {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

impl AppConfig {
    /// Defaults merged with the runtime overrides, if the page defines any
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(overrides) = read_runtime_overrides() {
            config.apply(overrides);
        }
        config.normalized()
    }

    fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Parsed log level; unknown names fall back to `info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}

fn read_runtime_overrides() -> Option<ConfigOverrides> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    // Logging is not initialised yet, the level comes from this very object
    match serde_wasm_bindgen::from_value(value) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("[CONFIG] ignoring malformed {}: {}", RUNTIME_CONFIG_GLOBAL, e).into(),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AppConfig {
        AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut config = base();
        config.apply(ConfigOverrides {
            api_base_url: Some("https://api.example.com/".to_string()),
            log_level: Some("debug".to_string()),
        });
        let config = config.normalized();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_blank_url_override_is_ignored() {
        let mut config = base();
        config.apply(ConfigOverrides {
            api_base_url: Some("   ".to_string()),
            log_level: None,
        });
        assert_eq!(config.normalized().api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let mut config = base();
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
