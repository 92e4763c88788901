use serde::Deserialize;

const fn default_confirmation_token_lifetime() -> u32 { 3600 * 2 }

const fn default_reset_token_lifetime() -> u32 { 3600 }

const fn default_email_change_token_lifetime() -> u32 { 3600 }

/// Lifetimes of signed tokens, in seconds
#[derive(Clone, Deserialize)]
pub struct TokenConfig {
    #[serde(default = "default_confirmation_token_lifetime")]
    pub confirmation_lifetime: u32,

    #[serde(default = "default_reset_token_lifetime")]
    pub reset_lifetime: u32,

    #[serde(default = "default_email_change_token_lifetime")]
    pub email_change_lifetime: u32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            confirmation_lifetime: default_confirmation_token_lifetime(),
            reset_lifetime: default_reset_token_lifetime(),
            email_change_lifetime: default_email_change_token_lifetime(),
        }
    }
}
