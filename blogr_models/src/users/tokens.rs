use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blogr_utils::tokens::{create_token, verify_token};

use crate::errors::ModelError;

use super::types::User;

#[derive(Deserialize, Serialize)]
struct ConfirmationClaims {
    confirm: Uuid,
}

#[derive(Deserialize, Serialize)]
struct ResetClaims {
    reset: Uuid,
}

#[derive(Deserialize, Serialize)]
struct EmailChangeClaims {
    change_email: Uuid,
    new_email: String,
}

fn sign<T: Serialize>(secret: &str, claims: T, lifetime: u32) -> String {
    let expires_at = Utc::now() + Duration::seconds(lifetime.into());
    create_token(secret, claims, expires_at)
}

impl User {
    pub fn generate_confirmation_token(
        &self,
        secret: &str,
        lifetime: u32,
    ) -> String {
        sign(secret, ConfirmationClaims { confirm: self.id }, lifetime)
    }

    pub fn confirm(
        &mut self,
        secret: &str,
        token: &str,
    ) -> Result<(), ModelError> {
        let claims: ConfirmationClaims =
            verify_token(secret, token, Utc::now())?;
        if claims.confirm != self.id {
            return Err(ModelError::TokenMismatch);
        };
        self.confirmed = true;
        log::info!("account confirmed: {}", self.username);
        Ok(())
    }

    pub fn generate_reset_token(
        &self,
        secret: &str,
        lifetime: u32,
    ) -> String {
        sign(secret, ResetClaims { reset: self.id }, lifetime)
    }

    pub fn reset_password(
        &mut self,
        secret: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), ModelError> {
        let claims: ResetClaims = verify_token(secret, token, Utc::now())?;
        if claims.reset != self.id {
            return Err(ModelError::TokenMismatch);
        };
        self.set_password(new_password)?;
        Ok(())
    }

    pub fn generate_email_change_token(
        &self,
        secret: &str,
        new_email: &str,
        lifetime: u32,
    ) -> String {
        let claims = EmailChangeClaims {
            change_email: self.id,
            new_email: new_email.to_string(),
        };
        sign(secret, claims, lifetime)
    }

    /// Changes email address if token is valid and the address
    /// is not used by another account
    pub fn change_email(
        &mut self,
        secret: &str,
        token: &str,
        is_email_taken: impl Fn(&str) -> bool,
    ) -> Result<(), ModelError> {
        let claims: EmailChangeClaims =
            verify_token(secret, token, Utc::now())?;
        if claims.change_email != self.id {
            return Err(ModelError::TokenMismatch);
        };
        if is_email_taken(&claims.new_email) {
            return Err(ModelError::AlreadyExists("email"));
        };
        self.set_email(claims.new_email);
        Ok(())
    }
}
