use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub authorize_endpoint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            client_id: "eFI1UkZmMXgzUzEzNzhrOGVwYV86MTpjaQ".to_string(),
            redirect_uri: "http://localhost:5173".to_string(),
            scope: "tweet.read users.read follows.read offline.access".to_string(),
            authorize_endpoint: "https://twitter.com/i/oauth2/authorize".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub predictor: PredictorConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AppConfig::default()
            }
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = env::var("PREDICT_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.predictor.endpoint = endpoint;
            }
        }
        if let Ok(timeout) = env::var("PREDICT_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.predictor.timeout_ms = value;
            }
        }
        if let Ok(client_id) = env::var("X_CLIENT_ID") {
            if !client_id.trim().is_empty() {
                self.auth.client_id = client_id;
            }
        }
        if let Ok(redirect_uri) = env::var("X_REDIRECT_URI") {
            if !redirect_uri.trim().is_empty() {
                self.auth.redirect_uri = redirect_uri;
            }
        }
        if let Ok(scope) = env::var("X_OAUTH_SCOPE") {
            if !scope.trim().is_empty() {
                self.auth.scope = scope;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("TWEETCAST_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/tweetcast.toml")))
}
