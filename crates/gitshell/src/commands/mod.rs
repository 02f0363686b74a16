//! Command handlers, one module per command group.

pub mod branch;
pub mod completion;
pub mod config_cmd;
pub mod export;
pub mod init;
pub mod log;
pub mod run;
pub mod staging;
pub mod status;
pub mod tag;
pub mod version;
