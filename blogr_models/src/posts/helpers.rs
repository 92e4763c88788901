use uuid::Uuid;

use crate::relationships::types::FollowGraph;

use super::types::Post;

/// Sorts posts, newest first
pub fn sort_timeline(posts: &mut [Post]) -> () {
    posts.sort_by(|post_1, post_2| post_2.timestamp.cmp(&post_1.timestamp));
}

/// Returns posts written by the user and by accounts followed by the user,
/// newest first
pub fn followed_posts<'post>(
    posts: &'post [Post],
    follow_graph: &FollowGraph,
    user_id: Uuid,
) -> Vec<&'post Post> {
    let mut timeline: Vec<_> = posts.iter()
        .filter(|post| {
            post.author_id == user_id ||
                follow_graph.is_following(user_id, post.author_id)
        })
        .collect();
    timeline.sort_by(|post_1, post_2| post_2.timestamp.cmp(&post_1.timestamp));
    timeline
}
