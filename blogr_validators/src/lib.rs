pub mod errors;
pub mod posts;
pub mod users;
