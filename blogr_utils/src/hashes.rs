use md5::Md5;
use sha2::{Digest, Sha256};

pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

pub fn sha256_hex(input: &[u8]) -> String {
    hex::encode(sha256(input))
}

pub fn md5_hex(input: &[u8]) -> String {
    hex::encode(Md5::digest(input))
}

/// Hash of normalized email address, used for Gravatar lookups and identicons
pub fn email_digest(email: &str) -> String {
    let normalized_email = email.trim().to_lowercase();
    md5_hex(normalized_email.as_bytes())
}
