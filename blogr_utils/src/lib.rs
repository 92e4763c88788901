pub mod base64;
pub mod hashes;
pub mod html;
pub mod identicons;
pub mod markdown;
pub mod passwords;
pub mod tokens;
