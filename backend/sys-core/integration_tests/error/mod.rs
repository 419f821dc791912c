mod eval;
mod file_read;
mod marshal;
