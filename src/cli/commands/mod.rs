//! Command implementations

pub mod init;
pub mod serve;
pub mod status;
pub mod validate;
