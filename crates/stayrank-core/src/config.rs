use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("STAYRANK_ENV", "development"))?;
    let log_level = or_default("STAYRANK_LOG_LEVEL", "info");
    let preferences_path = PathBuf::from(or_default(
        "STAYRANK_PREFERENCES_PATH",
        "./preferences.json",
    ));
    let results_path = PathBuf::from(or_default("STAYRANK_RESULTS_PATH", "./results.json"));

    let search_base_url = or_default("STAYRANK_SEARCH_BASE_URL", "http://127.0.0.1:8787/");
    let search_api_key = lookup("STAYRANK_SEARCH_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());

    let search_timeout_secs = parse_u64("STAYRANK_SEARCH_TIMEOUT_SECS", "120")?;
    let request_timeout_secs = parse_u64("STAYRANK_REQUEST_TIMEOUT_SECS", "30")?;
    if search_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STAYRANK_SEARCH_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    // At least one detail lookup must be allowed in flight.
    let detail_concurrency = parse_usize("STAYRANK_DETAIL_CONCURRENCY", "4")?.max(1);
    let user_agent = or_default("STAYRANK_USER_AGENT", "stayrank/0.1 (trip-planning)");

    Ok(AppConfig {
        env,
        log_level,
        preferences_path,
        results_path,
        search_base_url,
        search_api_key,
        search_timeout_secs,
        request_timeout_secs,
        detail_concurrency,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "development" | "dev" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" | "prod" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STAYRANK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
