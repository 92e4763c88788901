use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blogr_utils::markdown::render_comment_body;

use crate::errors::ModelError;
use crate::users::types::{CurrentUser, Permission};

#[derive(Clone, Debug)]
pub struct Comment {
    pub id: Uuid,
    pub body: String,
    pub body_html: String,
    pub timestamp: DateTime<Utc>,
    // Hidden by a moderator
    pub disabled: bool,
    pub author_id: Uuid,
    pub post_id: Uuid,
}

impl Comment {
    pub fn new(author_id: Uuid, post_id: Uuid, body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: body.to_string(),
            body_html: render_comment_body(body),
            timestamp: Utc::now(),
            disabled: false,
            author_id,
            post_id,
        }
    }

    pub fn from_json(
        author_id: Uuid,
        post_id: Uuid,
        comment_data: CommentCreateData,
    ) -> Result<Self, ModelError> {
        if comment_data.body.trim().is_empty() {
            return Err(ModelError::InvalidData("comment does not have a body"));
        };
        Ok(Self::new(author_id, post_id, &comment_data.body))
    }

    pub fn set_disabled(
        &mut self,
        current_user: &CurrentUser,
        disabled: bool,
    ) -> Result<(), ModelError> {
        if !current_user.can(Permission::MODERATE_COMMENTS) {
            return Err(ModelError::PermissionError);
        };
        self.disabled = disabled;
        Ok(())
    }

    pub fn to_json(&self) -> CommentData {
        // Content of disabled comments is not exposed
        let (body, body_html) = if self.disabled {
            (None, None)
        } else {
            (Some(self.body.clone()), Some(self.body_html.clone()))
        };
        CommentData {
            id: self.id,
            body,
            body_html,
            timestamp: self.timestamp,
            disabled: self.disabled,
            author_id: self.author_id,
            post_id: self.post_id,
        }
    }
}

#[derive(Deserialize)]
pub struct CommentCreateData {
    #[serde(default)]
    pub body: String,
}

#[derive(Serialize)]
pub struct CommentData {
    pub id: Uuid,
    pub body: Option<String>,
    pub body_html: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub disabled: bool,
    pub author_id: Uuid,
    pub post_id: Uuid,
}
