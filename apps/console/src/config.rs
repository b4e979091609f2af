use std::{collections::HashMap, fs};

use session_core::DEFAULT_API_URL;

#[derive(Debug)]
pub struct Settings {
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Defaults, then `console.toml`, then the `API_URL` environment variable.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("console.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("API_URL") {
        settings.api_url = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(Settings::default().api_url, "http://localhost:8000");
    }

    #[test]
    fn environment_overrides_the_default() {
        std::env::set_var("API_URL", "http://example.test:9000");
        let settings = load_settings();
        std::env::remove_var("API_URL");
        assert_eq!(settings.api_url, "http://example.test:9000");
    }
}
