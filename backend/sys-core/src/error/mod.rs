pub mod config;
pub mod eval;
pub mod file_read;
pub mod hex;
pub mod marshal;

pub use self::config::ConfigError;
pub use self::eval::EvalError;
pub use self::file_read::FileReadError;
pub use self::hex::HexError;
pub use self::marshal::MarshalError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    FileRead(#[from] FileReadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
