pub mod convert;
pub mod crawls;
pub mod init;
pub mod protocols;
pub mod sessions;
