use std::str::FromStr;

use super::config::Config;
use super::environment::Environment;
use super::ConfigError;

struct EnvConfig {
    config_path: String,
    environment: Option<Environment>,
    secret_key: Option<String>,
    admin_email: Option<String>,
}

#[cfg(feature = "production")]
const DEFAULT_CONFIG_PATH: &str = "/etc/blogr/config.yaml";
#[cfg(not(feature = "production"))]
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

fn parse_env() -> EnvConfig {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());
    let environment = std::env::var("ENVIRONMENT").ok()
        .map(|val| Environment::from_str(&val).expect("invalid environment type"));
    let secret_key = std::env::var("SECRET_KEY").ok();
    let admin_email = std::env::var("BLOGR_ADMIN").ok();
    EnvConfig {
        config_path,
        environment,
        secret_key,
        admin_email,
    }
}

/// Returns config and a list of unknown parameters
fn deserialize_config(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), serde_yaml::Error> {
    let mut ignored = vec![];
    let deserializer = serde_yaml::Deserializer::from_str(config_yaml);
    let config: Config = serde_ignored::deserialize(deserializer, |path| {
        ignored.push(path.to_string());
    })?;
    let warnings = ignored.into_iter()
        .map(|path| format!("unknown config parameter: {}", path))
        .collect();
    Ok((config, warnings))
}

fn apply_env(config: &mut Config, env: EnvConfig) -> () {
    config.config_path = env.config_path;
    if let Some(environment) = env.environment {
        // Overwrite default only if ENVIRONMENT variable is set
        config.environment = environment;
    };
    if let Some(secret_key) = env.secret_key {
        config.secret_key = secret_key;
    };
    if let Some(admin_email) = env.admin_email {
        config.admin_email = Some(admin_email);
    };
}

fn load_config(
    config_yaml: &str,
    maybe_env: Option<EnvConfig>,
) -> Result<(Config, Vec<String>), ConfigError> {
    let (mut config, mut warnings) = deserialize_config(config_yaml)?;
    if let Some(env) = maybe_env {
        apply_env(&mut config, env);
    };
    warnings.extend(config.validate()?);
    Ok((config, warnings))
}

/// Parses and validates YAML config.
/// Returns config and a list of warnings.
pub fn parse_config_str(
    config_yaml: &str,
) -> Result<(Config, Vec<String>), ConfigError> {
    load_config(config_yaml, None)
}

pub fn parse_config() -> (Config, Vec<String>) {
    let env = parse_env();
    let config_yaml = std::fs::read_to_string(&env.config_path)
        .expect("failed to load config file");
    load_config(&config_yaml, Some(env))
        .unwrap_or_else(|error| panic!("{}", error))
}
