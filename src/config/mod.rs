use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

pub static GENERATION_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    host: Host,
    #[serde(default)]
    app: App,
    generation: Option<Generation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct App {
    #[serde(default)]
    docs: bool,
    #[serde(default = "default_demo_user")]
    demo_user: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Generation {
    #[serde(default)]
    enabled: bool,
    #[serde(default = "default_endpoint")]
    endpoint: String,
    #[serde(default = "default_model")]
    model: String,
    #[serde(default)]
    api_key: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_demo_user() -> String {
    String::from("demo-user")
}

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Host {
    fn default() -> Self {
        Self {
            bindto: String::from("127.0.0.1:5000"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            docs: false,
            demo_user: default_demo_user(),
        }
    }
}

impl Config {
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                match Self::load(use_local) {
                    Ok(c) => c,
                    Err(ConfigError::ConfigNotFound) => {
                        tracing::warn!("config not found, using built-in defaults");
                        Config::default()
                    }
                    Err(e) => {
                        crate::error::log_error(&e);
                        tracing::error!("Config is malformed.");
                        std::process::exit(1);
                    }
                }
            })
            .await
    }

    pub fn load(use_local: bool) -> ConfigResult<Self> {
        let bytes = read_config(use_local)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = toml::from_slice(bytes)?;
        Ok(config.with_generation_key(std::env::var(GENERATION_KEY_ENV).ok()))
    }

    // a key alone never enables generation, the `[generation]` section must be present
    pub fn with_generation_key(mut self, key: Option<String>) -> Self {
        let key = key.filter(|k| !k.trim().is_empty());
        if let (Some(key), Some(generation)) = (key, self.generation.as_mut()) {
            generation.api_key = key;
        }
        self
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn generation(&self) -> Option<&Generation> {
        self.generation
            .as_ref()
            .filter(|g| g.enabled && !g.api_key.trim().is_empty())
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }

    #[inline]
    pub fn demo_user(&self) -> &str {
        &self.demo_user
    }
}

impl Generation {
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[inline]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[inline]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
