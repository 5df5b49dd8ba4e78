use super::models::Config;
use config::{ConfigError, Environment, File, Map};
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "VERDICT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/verdict.toml";
const ENV_PREFIX: &str = "VERDICT";
const ENV_SEPARATOR: &str = "__";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    let vars = environment(None);
    let config_path = vars
        .get(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    build(config_path, vars)
}

/// Load configuration from a specific path, `.env` and the process environment
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    build(config_path, environment(None))
}

/// `.env` pairs overlaid with the process environment
///
/// Without `dotenv_path`, `.env` is searched for from the current directory
/// upwards. A missing or unreadable `.env` contributes nothing. The process
/// environment is left untouched.
fn environment(dotenv_path: Option<&Path>) -> Map<String, String> {
    let dotenv = match dotenv_path {
        Some(path) => dotenvy::from_path_iter(path),
        None => dotenvy::dotenv_iter(),
    };

    let mut vars: Map<String, String> = dotenv.into_iter().flatten().flatten().collect();
    vars.extend(
        env::vars_os().filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
    );
    vars
}

fn build(config_path: PathBuf, vars: Map<String, String>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::debug!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // VERDICT__SERVICE__BASE_URL -> service.base_url
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(Some(vars)),
    );

    let config = builder.build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_only() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.service.request_timeout_ms, 120_000);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[service]
base_url = "http://classifier:9000"
connect_timeout_ms = 2500
request_timeout_ms = 300000
user_agent = "newsroom-tools/2.1"

[logging]
filter = "verdict=debug,reqwest=warn"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.service.base_url, "http://classifier:9000");
        assert_eq!(config.service.connect_timeout_ms, 2500);
        assert_eq!(config.service.request_timeout_ms, 300_000);
        assert_eq!(config.service.user_agent, "newsroom-tools/2.1");
        assert_eq!(config.logging.filter, "verdict=debug,reqwest=warn");
    }

    // The process environment is not mutated here: that is unsafe under the
    // parallel test runner. `.env` files exercise the same override layer.

    #[test]
    fn test_dotenv_overrides_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");
        let dotenv_path = temp_dir.path().join(".env");

        fs::write(
            &config_path,
            "[service]\nbase_url = \"http://classifier:9000\"\nconnect_timeout_ms = 2500\n",
        )
        .unwrap();
        fs::write(
            &dotenv_path,
            "VERDICT__SERVICE__BASE_URL=http://from-dotenv:8000\nVERDICT__SERVICE__REQUEST_TIMEOUT_MS=30000\n",
        )
        .unwrap();

        let config = build(config_path, environment(Some(&dotenv_path))).unwrap();
        assert_eq!(config.service.base_url, "http://from-dotenv:8000");
        assert_eq!(config.service.connect_timeout_ms, 2500);
        assert_eq!(config.service.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_dotenv_applies_without_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");
        let dotenv_path = temp_dir.path().join(".env");

        fs::write(&dotenv_path, "VERDICT__LOGGING__FILTER=verdict=trace\n").unwrap();

        let config = build(config_path, environment(Some(&dotenv_path))).unwrap();
        assert_eq!(config.logging.filter, "verdict=trace");
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_missing_dotenv_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let dotenv_path = temp_dir.path().join(".env");

        // Only process variables remain
        let vars = environment(Some(&dotenv_path));
        assert!(vars.keys().all(|key| env::var_os(key).is_some()));
    }

    #[test]
    fn test_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");

        fs::write(&config_path, "[service\nbase_url = ").unwrap();

        assert!(load_from_sources(config_path).is_err());
    }
}
