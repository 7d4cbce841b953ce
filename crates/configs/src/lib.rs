use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Which persistence backend the service talks to.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mongodb,
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Backend::Mongodb),
            "memory" => Ok(Backend::Memory),
            other => Err(anyhow!("unknown database backend `{other}` (expected mongodb or memory)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_min_pool_size")]
    pub min_pool_size: u32,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_server_selection_timeout")]
    pub server_selection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            url: default_url(),
            name: default_name(),
            app_name: default_app_name(),
            min_pool_size: default_min_pool_size(),
            max_pool_size: default_max_pool_size(),
            connect_timeout_secs: default_connect_timeout(),
            server_selection_timeout_secs: default_server_selection_timeout(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 5000 }
fn default_url() -> String { "mongodb://127.0.0.1:27017/fitness".into() }
fn default_name() -> String { "fitness".into() }
fn default_app_name() -> String { "fitness_api".into() }
fn default_min_pool_size() -> u32 { 0 }
fn default_max_pool_size() -> u32 { 10 }
fn default_connect_timeout() -> u64 { 10 }
fn default_server_selection_timeout() -> u64 { 10 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File (if present) + process environment, normalized and validated.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay environment variables on top of the file values.
    ///
    /// `db` is accepted as an alias of `MONGODB_URI`; the latter wins when both are set.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow!("PORT must be a port number: {e}"))?;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            self.server.worker_threads = threads.trim().parse().ok();
        }
        if let Some(url) = lookup("MONGODB_URI").or_else(|| lookup("db")) {
            self.database.url = url;
        }
        if let Some(name) = lookup("MONGODB_DATABASE") {
            self.database.name = name;
        }
        if let Some(backend) = lookup("DATABASE_BACKEND") {
            self.database.backend = backend.parse()?;
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.backend == Backend::Memory {
            return Ok(());
        }
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or MONGODB_URI"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.url must start with mongodb:// or mongodb+srv://"));
        }
        if self.name.trim().is_empty() {
            return Err(anyhow!("database.name must not be empty"));
        }
        if self.max_pool_size == 0 || self.max_pool_size < self.min_pool_size {
            return Err(anyhow!("database.max_pool_size must be >= 1 and >= min_pool_size"));
        }
        if self.connect_timeout_secs == 0 || self.server_selection_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
