use blogr_utils::identicons::{Identicon, IdenticonOptions};
use log::{Level as LogLevel};
use serde::Deserialize;
use url::Url;

use super::avatars::AvatarConfig;
use super::environment::Environment;
use super::tokens::TokenConfig;
use super::ConfigError;

/// Must be replaced in production
pub const DEVELOPMENT_SECRET_KEY: &str = "44617457d542163d10ada66726b31ef80a88ac1a41013ea5";

// Used to check identicon options
const PROBE_HASH: &str = "000000000000000";

fn default_log_level() -> LogLevel { LogLevel::Info }

fn default_secret_key() -> String { DEVELOPMENT_SECRET_KEY.to_string() }

fn default_instance_title() -> String { "Blogr".to_string() }

const fn default_posts_per_page() -> u32 { 20 }

const fn default_followers_per_page() -> u32 { 50 }

const fn default_comments_per_page() -> u32 { 30 }

#[derive(Clone, Deserialize)]
pub struct Config {
    // Properties auto-populated from the environment
    #[serde(skip)]
    pub environment: Environment,

    #[serde(skip)]
    pub config_path: String,

    // Core settings
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    // Passed to the database layer as is
    database_url: Option<String>,

    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    // Account with this email address gets administrator role
    pub admin_email: Option<String>,

    #[serde(default = "default_instance_title")]
    pub instance_title: String,

    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,

    #[serde(default = "default_followers_per_page")]
    pub followers_per_page: u32,

    #[serde(default = "default_comments_per_page")]
    pub comments_per_page: u32,

    #[serde(default)]
    pub avatars: AvatarConfig,

    #[serde(default)]
    pub identicons: IdenticonOptions,

    #[serde(default)]
    pub tokens: TokenConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            config_path: String::new(),
            log_level: default_log_level(),
            database_url: None,
            secret_key: default_secret_key(),
            admin_email: None,
            instance_title: default_instance_title(),
            posts_per_page: default_posts_per_page(),
            followers_per_page: default_followers_per_page(),
            comments_per_page: default_comments_per_page(),
            avatars: AvatarConfig::default(),
            identicons: IdenticonOptions::default(),
            tokens: TokenConfig::default(),
        }
    }
}

impl Config {
    pub fn database_url(&self) -> String {
        if let Some(ref database_url) = self.database_url {
            return database_url.clone();
        };
        let file_name = match self.environment {
            Environment::Development => "data-dev.sqlite",
            Environment::Testing => "data-test.sqlite",
            Environment::Production => "data.sqlite",
        };
        format!("sqlite://{}", file_name)
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_email.as_ref()
            .map(|admin_email| admin_email.eq_ignore_ascii_case(email.trim()))
            .unwrap_or(false)
    }

    /// Returns list of warnings
    pub(super) fn validate(&self) -> Result<Vec<String>, ConfigError> {
        let mut warnings = vec![];
        if self.secret_key.is_empty() {
            return Err(ConfigError::InvalidValue("secret_key must not be empty"));
        };
        if self.secret_key == DEVELOPMENT_SECRET_KEY &&
            self.environment == Environment::Production
        {
            warnings.push("development secret key is used in production".to_string());
        };
        if self.posts_per_page == 0 ||
            self.followers_per_page == 0 ||
            self.comments_per_page == 0
        {
            return Err(ConfigError::InvalidValue("page size must be greater than zero"));
        };
        Identicon::new(PROBE_HASH, self.identicons.clone())?;
        Url::parse(&self.avatars.gravatar_url)
            .map_err(|_| ConfigError::InvalidValue("invalid gravatar_url"))?;
        if self.admin_email.is_none() {
            warnings.push("admin_email is not set".to_string());
        };
        Ok(warnings)
    }
}
