use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_dishes_path")]
    pub dishes: String,
    #[serde(default = "default_categories_path")]
    pub categories: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dishes: default_dishes_path(),
            categories: default_categories_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Number of consecutive days a schedule covers.
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// Anti-repeat window; defaults to the horizon when unset.
    #[serde(default)]
    pub history_window: Option<usize>,
}

impl PlannerConfig {
    pub fn window(&self) -> usize {
        self.history_window.unwrap_or(self.horizon)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            history_window: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShareConfig {
    #[serde(default = "default_share_endpoint")]
    pub endpoint: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            endpoint: default_share_endpoint(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_dishes_path() -> String {
    "assets/dishes.json".to_string()
}

fn default_categories_path() -> String {
    "assets/ingredient-category.json".to_string()
}

fn default_horizon() -> usize {
    planning::DEFAULT_HORIZON
}

fn default_share_endpoint() -> String {
    "http://localhost:8080/api/share".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file with environment
    /// overrides (prefix `WEEKMENU`, `__` as section separator).
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        match path {
            Some(path) => builder = builder.add_source(File::with_name(&path)),
            None => builder = builder.add_source(File::with_name("weekmenu").required(false)),
        }

        builder = builder.add_source(Environment::with_prefix("WEEKMENU").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.planner.horizon == 0 {
            return Err("planner.horizon must be at least 1".to_string());
        }
        if self.planner.window() == 0 {
            return Err("planner.history_window must be at least 1".to_string());
        }
        if self.share.endpoint.is_empty() {
            return Err("share.endpoint must not be empty".to_string());
        }
        Ok(())
    }
}
