use url::form_urlencoded;

use blogr_config::Config;
use blogr_models::users::types::User;
use blogr_utils::identicons::{Identicon, InvalidInputError};

pub fn gravatar_url(config: &Config, avatar_hash: &str, size: u32) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("s", &size.to_string())
        .append_pair("d", &config.avatars.default_image)
        .append_pair("r", &config.avatars.rating)
        .finish();
    format!(
        "{}/{}?{}",
        config.avatars.gravatar_url.trim_end_matches('/'),
        avatar_hash,
        query,
    )
}

pub fn identicon_data_uri(
    config: &Config,
    avatar_hash: &str,
    size: u32,
) -> Result<String, InvalidInputError> {
    let options = config.identicons.clone().with_size(size);
    let identicon = Identicon::new(avatar_hash, options)?;
    Ok(identicon.to_data_uri())
}

/// Returns URL of user's avatar.
/// Identicons are used when Gravatar is disabled.
pub fn avatar_url(config: &Config, user: &User, size: u32) -> String {
    if config.avatars.gravatar_enabled {
        return gravatar_url(config, &user.avatar_hash, size);
    };
    identicon_data_uri(config, &user.avatar_hash, size)
        .unwrap_or_else(|error| {
            log::debug!(
                "failed to generate identicon for {}: {}",
                user.username,
                error,
            );
            gravatar_url(config, &user.avatar_hash, size)
        })
}
