mod eval;
mod hex;
mod marshal;
mod shell;
