pub mod filter;
pub mod init;
pub mod verify;
