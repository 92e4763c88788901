use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug)]
pub struct Follow {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// Follow relationships between users
#[derive(Default)]
pub struct FollowGraph {
    follows: Vec<Follow>,
}

impl FollowGraph {
    pub fn follow(
        &mut self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<(), ModelError> {
        if follower_id == followed_id {
            return Err(ModelError::InvalidData("user can't follow themselves"));
        };
        if self.is_following(follower_id, followed_id) {
            return Ok(());
        };
        self.follows.push(Follow {
            follower_id,
            followed_id,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Returns false if relationship didn't exist
    pub fn unfollow(&mut self, follower_id: Uuid, followed_id: Uuid) -> bool {
        let follow_count = self.follows.len();
        self.follows.retain(|follow| {
            follow.follower_id != follower_id || follow.followed_id != followed_id
        });
        self.follows.len() < follow_count
    }

    pub fn is_following(&self, follower_id: Uuid, followed_id: Uuid) -> bool {
        self.follows.iter().any(|follow| {
            follow.follower_id == follower_id && follow.followed_id == followed_id
        })
    }

    pub fn is_followed_by(&self, user_id: Uuid, follower_id: Uuid) -> bool {
        self.is_following(follower_id, user_id)
    }

    /// Newest first
    pub fn followers(&self, user_id: Uuid) -> Vec<&Follow> {
        self.follows.iter()
            .rev()
            .filter(|follow| follow.followed_id == user_id)
            .collect()
    }

    /// Newest first
    pub fn followed(&self, user_id: Uuid) -> Vec<&Follow> {
        self.follows.iter()
            .rev()
            .filter(|follow| follow.follower_id == user_id)
            .collect()
    }
}
