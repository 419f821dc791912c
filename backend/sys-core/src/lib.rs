pub mod config;
pub mod error;
pub mod eval;
pub mod exec;
pub mod file_read;
pub mod hex;
pub mod marshal;
pub mod ops;

mod shell;
#[cfg(test)]
mod tests;

pub use crate::config::SysConfig;
pub use crate::hex::HexText;
pub use crate::ops::SysOps;

pub const CONFIG_FILE_NAME: &str = "pg_sys.json";
pub const CONFIG_TEMP_FILE_NAME: &str = const_format::concatcp!(CONFIG_FILE_NAME, ".tmp");
