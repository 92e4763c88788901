use serde::Deserialize;

const fn default_gravatar_enabled() -> bool { true }

fn default_gravatar_url() -> String { "https://secure.gravatar.com/avatar".to_string() }

fn default_gravatar_default_image() -> String { "identicon".to_string() }

fn default_gravatar_rating() -> String { "g".to_string() }

#[derive(Clone, Deserialize)]
pub struct AvatarConfig {
    // Identicons are generated locally when Gravatar is disabled
    #[serde(default = "default_gravatar_enabled")]
    pub gravatar_enabled: bool,

    #[serde(default = "default_gravatar_url")]
    pub gravatar_url: String,

    // Image shown by Gravatar when there's no avatar for the hash
    #[serde(default = "default_gravatar_default_image")]
    pub default_image: String,

    #[serde(default = "default_gravatar_rating")]
    pub rating: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            gravatar_enabled: default_gravatar_enabled(),
            gravatar_url: default_gravatar_url(),
            default_image: default_gravatar_default_image(),
            rating: default_gravatar_rating(),
        }
    }
}
