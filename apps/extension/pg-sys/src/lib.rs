//! Shared library loaded by the database engine.
//!
//! Exposes `sys_exec`, `sys_eval`, `sys_fileread` and `sys_free` over the C ABI,
//! plus `pg_sys_init` to load configuration and install the logger.

pub mod error;
pub mod ffi;
pub mod logger;
pub mod state;

#[cfg(test)]
mod tests;
