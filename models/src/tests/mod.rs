mod exit_status;
mod interpreter;
