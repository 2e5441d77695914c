pub mod config;
pub mod init;
pub mod timecard;
pub mod timeline;
