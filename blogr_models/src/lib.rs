pub mod comments;
pub mod errors;
pub mod pagination;
pub mod posts;
pub mod relationships;
pub mod users;
