pub mod tokens;
pub mod types;
