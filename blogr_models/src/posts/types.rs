use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blogr_utils::markdown::render_post_body;

use crate::errors::ModelError;
use crate::users::types::{CurrentUser, Permission};

#[derive(Clone, Debug)]
pub struct Post {
    pub id: Uuid,
    // Markdown
    pub body: String,
    pub body_html: String,
    pub timestamp: DateTime<Utc>,
    pub author_id: Uuid,
}

impl Post {
    pub fn new(author_id: Uuid, body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: body.to_string(),
            body_html: render_post_body(body),
            timestamp: Utc::now(),
            author_id,
        }
    }

    pub fn from_json(
        author_id: Uuid,
        post_data: PostCreateData,
    ) -> Result<Self, ModelError> {
        if post_data.body.trim().is_empty() {
            return Err(ModelError::InvalidData("post does not have a body"));
        };
        Ok(Self::new(author_id, &post_data.body))
    }

    pub fn set_body(&mut self, body: &str) -> () {
        self.body = body.to_string();
        self.body_html = render_post_body(body);
    }

    /// Post can be edited by its author or by administrator
    pub fn can_edit(&self, current_user: &CurrentUser) -> bool {
        match current_user.user() {
            Some(user) => {
                (user.id == self.author_id &&
                    user.can(Permission::WRITE_ARTICLES)) ||
                user.is_administrator()
            },
            None => false,
        }
    }

    pub fn to_json(&self) -> PostData {
        PostData {
            id: self.id,
            body: self.body.clone(),
            body_html: self.body_html.clone(),
            timestamp: self.timestamp,
            author_id: self.author_id,
        }
    }
}

#[derive(Deserialize)]
pub struct PostCreateData {
    #[serde(default)]
    pub body: String,
}

#[derive(Serialize)]
pub struct PostData {
    pub id: Uuid,
    pub body: String,
    pub body_html: String,
    pub timestamp: DateTime<Utc>,
    pub author_id: Uuid,
}
