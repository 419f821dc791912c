use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Interpreter};

use std::panic::Location;

/// Builder for creating validated Interpreter instances.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    program: Option<String>,
    flag: Option<String>,
}

impl InterpreterBuilder {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Build the Interpreter with validation.
    #[track_caller]
    pub fn build(self) -> Result<Interpreter, ModelError> {
        let program = self.program.ok_or_else(|| ModelError::Validation {
            message: String::from("Interpreter program is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if program.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Interpreter program cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let flag = self.flag.ok_or_else(|| ModelError::Validation {
            message: String::from("Interpreter flag is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if flag.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Interpreter flag cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if program.contains('\0') || flag.contains('\0') {
            return Err(ModelError::Validation {
                message: format!("Interpreter cannot contain NUL bytes: {program:?} {flag:?}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Interpreter { program, flag })
    }
}
