mod config;
mod error;
mod eval;
mod exec;
mod file_read;
mod helpers;
