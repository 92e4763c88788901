mod avatars;
mod config;
mod environment;
mod loader;
mod tokens;

pub use avatars::AvatarConfig;
pub use config::{Config, DEVELOPMENT_SECRET_KEY};
pub use environment::Environment;
pub use loader::{parse_config, parse_config_str};
pub use tokens::TokenConfig;

pub const SOFTWARE_NAME: &str = "Blogr";
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid yaml data: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("invalid identicon options: {0}")]
    IdenticonError(#[from] blogr_utils::identicons::InvalidInputError),

    #[error("{0}")]
    InvalidValue(&'static str),
}
