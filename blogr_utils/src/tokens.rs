//! Expiring signed tokens.
//!
//! Token format: `base64url(payload).base64url(signature)`, where payload is
//! a JSON object with `exp` (unix timestamp) field and the signature is an
//! Ed25519 signature of the encoded payload. The signing key is derived
//! from the application secret.
use chrono::{DateTime, Utc};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use super::base64;
use super::hashes::sha256;

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("invalid token format")]
    InvalidFormat,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,
}

#[derive(Deserialize, Serialize)]
struct TokenPayload<T> {
    #[serde(flatten)]
    claims: T,
    exp: i64,
}

fn signing_key(secret: &str) -> SigningKey {
    let seed = sha256(secret.as_bytes());
    SigningKey::from_bytes(&seed)
}

pub fn create_token<T: Serialize>(
    secret: &str,
    claims: T,
    expires_at: DateTime<Utc>,
) -> String {
    let payload = TokenPayload { claims, exp: expires_at.timestamp() };
    let payload_json = serde_json::to_string(&payload)
        .expect("token payload should be serializable");
    let payload_encoded = base64::encode_urlsafe_no_pad(payload_json);
    let signature = signing_key(secret).sign(payload_encoded.as_bytes());
    let signature_encoded =
        base64::encode_urlsafe_no_pad(signature.to_bytes());
    format!("{}.{}", payload_encoded, signature_encoded)
}

pub fn verify_token<T: DeserializeOwned>(
    secret: &str,
    token: &str,
    now: DateTime<Utc>,
) -> Result<T, TokenError> {
    let (payload_encoded, signature_encoded) = token.split_once('.')
        .ok_or(TokenError::InvalidFormat)?;
    let signature_bytes: [u8; 64] =
        base64::decode_urlsafe_no_pad(signature_encoded)
            .map_err(|_| TokenError::InvalidFormat)?
            .try_into()
            .map_err(|_| TokenError::InvalidFormat)?;
    let signature = Signature::from_bytes(&signature_bytes);
    signing_key(secret)
        .verifying_key()
        .verify(payload_encoded.as_bytes(), &signature)
        .map_err(|_| TokenError::InvalidSignature)?;
    let payload_json = base64::decode_urlsafe_no_pad(payload_encoded)
        .map_err(|_| TokenError::InvalidFormat)?;
    let payload: TokenPayload<T> = serde_json::from_slice(&payload_json)
        .map_err(|_| TokenError::InvalidFormat)?;
    if payload.exp <= now.timestamp() {
        return Err(TokenError::Expired);
    };
    Ok(payload.claims)
}
