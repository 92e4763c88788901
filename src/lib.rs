pub mod avatars;
pub mod init;
pub mod logger;
