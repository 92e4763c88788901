use std::ops::BitOr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use blogr_utils::{
    hashes::email_digest,
    passwords::{hash_password, verify_password},
};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Permission(u8);

impl Permission {
    pub const FOLLOW: Self = Self(0x01);
    pub const COMMENT: Self = Self(0x02);
    pub const WRITE_ARTICLES: Self = Self(0x04);
    pub const MODERATE_COMMENTS: Self = Self(0x08);
    pub const ADMINISTER: Self = Self(0x80);
    pub const ALL: Self = Self(0xff);

    pub fn from_bits(bits: u8) -> Self { Self(bits) }

    pub fn bits(&self) -> u8 { self.0 }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Permission {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Role {
    pub name: String,
    // Assigned to new users
    pub is_default: bool,
    pub permissions: Permission,
}

impl Role {
    fn new(name: &str, is_default: bool, permissions: Permission) -> Self {
        Self { name: name.to_string(), is_default, permissions }
    }

    pub fn is_administrator(&self) -> bool {
        self.permissions == Permission::ALL
    }
}

pub fn default_roles() -> Vec<Role> {
    vec![
        Role::new(
            "User",
            true,
            Permission::FOLLOW |
                Permission::COMMENT |
                Permission::WRITE_ARTICLES,
        ),
        Role::new(
            "Moderator",
            false,
            Permission::FOLLOW |
                Permission::COMMENT |
                Permission::WRITE_ARTICLES |
                Permission::MODERATE_COMMENTS,
        ),
        Role::new("Administrator", false, Permission::ALL),
    ]
}

pub fn find_role<'role>(roles: &'role [Role], name: &str) -> Option<&'role Role> {
    roles.iter().find(|role| role.name == name)
}

pub struct UserCreateData {
    pub email: String,
    pub username: String,
    pub password: Option<String>,
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
    pub confirmed: bool,
    pub name: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub member_since: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    // Hash of normalized email address
    pub avatar_hash: String,
}

impl User {
    /// Creates new user. Administrator role is assigned if email matches
    /// the configured admin address, otherwise the default role is used.
    pub fn new(
        user_data: UserCreateData,
        roles: &[Role],
        is_admin_email: bool,
    ) -> Result<Self, ModelError> {
        let maybe_admin_role = if is_admin_email {
            roles.iter().find(|role| role.is_administrator())
        } else {
            None
        };
        let role = maybe_admin_role
            .or_else(|| roles.iter().find(|role| role.is_default))
            .cloned();
        let now = Utc::now();
        let mut user = Self {
            id: Uuid::new_v4(),
            avatar_hash: email_digest(&user_data.email),
            email: user_data.email,
            username: user_data.username,
            role,
            password_hash: None,
            confirmed: false,
            name: None,
            location: None,
            about_me: None,
            member_since: now,
            last_seen: now,
        };
        if let Some(ref password) = user_data.password {
            user.set_password(password)?;
        };
        Ok(user)
    }

    pub fn set_password(&mut self, password: &str) -> Result<(), ModelError> {
        let password_hash = hash_password(password)?;
        self.password_hash = Some(password_hash);
        Ok(())
    }

    pub fn verify_password(&self, password: &str) -> bool {
        let Some(ref password_hash) = self.password_hash else {
            return false;
        };
        verify_password(password_hash, password).unwrap_or_else(|error| {
            log::warn!("password verification error: {}", error);
            false
        })
    }

    pub(super) fn set_email(&mut self, email: String) -> () {
        self.avatar_hash = email_digest(&email);
        self.email = email;
    }

    pub fn can(&self, permissions: Permission) -> bool {
        self.role.as_ref()
            .map(|role| role.permissions.contains(permissions))
            .unwrap_or(false)
    }

    pub fn is_administrator(&self) -> bool {
        self.can(Permission::ADMINISTER)
    }

    /// Updates last seen time
    pub fn ping(&mut self) -> () {
        self.last_seen = Utc::now();
    }

    pub fn to_json(&self) -> UserData {
        UserData {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            about_me: self.about_me.clone(),
            member_since: self.member_since,
            last_seen: self.last_seen,
            avatar_hash: self.avatar_hash.clone(),
        }
    }
}

/// User of the current request
pub enum CurrentUser {
    Anonymous,
    Authenticated(User),
}

impl CurrentUser {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn can(&self, permissions: Permission) -> bool {
        self.user()
            .map(|user| user.can(permissions))
            .unwrap_or(false)
    }

    pub fn is_administrator(&self) -> bool {
        self.can(Permission::ADMINISTER)
    }
}

#[derive(Serialize)]
pub struct UserData {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub about_me: Option<String>,
    pub member_since: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub avatar_hash: String,
}
