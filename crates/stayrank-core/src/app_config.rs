use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings, resolved once at startup and passed down by reference.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub preferences_path: PathBuf,
    pub results_path: PathBuf,
    pub search_base_url: String,
    pub search_api_key: Option<String>,
    /// Upper bound on the whole search call, detail fan-out included.
    pub search_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub detail_concurrency: usize,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("preferences_path", &self.preferences_path)
            .field("results_path", &self.results_path)
            .field("search_base_url", &self.search_base_url)
            .field(
                "search_api_key",
                &self.search_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("detail_concurrency", &self.detail_concurrency)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
