//! Process-wide operations shared by every C entry point.

use crate::error::PgSysError;
use crate::logger;

use std::path::Path;
use std::sync::{LazyLock, OnceLock};

use log::{info, warn};
use sys_core::error::CoreError;
use sys_core::{SysConfig, SysOps};

/// Set once by the first successful [`configure`].
static OPS: OnceLock<SysOps> = OnceLock::new();

/// Served until [`configure`] runs; never stored in `OPS`.
static DEFAULT_OPS: LazyLock<SysOps> = LazyLock::new(SysOps::default);

/// Operations used by the C entry points. Defaults apply until [`configure`] runs.
pub fn ops() -> &'static SysOps {
    OPS.get().unwrap_or_else(|| LazyLock::force(&DEFAULT_OPS))
}

/// Whether [`configure`] has installed a configuration.
pub fn is_configured() -> bool {
    OPS.get().is_some()
}

/// Install the logger in `config_dir` and load `pg_sys.json` from it.
///
/// With no directory, the default configuration is used and no logger is
/// installed. Only the first successful call takes effect; later calls keep the
/// configuration already in place.
///
/// # Errors
///
/// Returns an error if the logger cannot be created or the config file is
/// unreadable or invalid.
pub fn configure(config_dir: Option<&Path>) -> Result<(), PgSysError> {
    let config = match config_dir {
        Some(dir) => {
            logger::initialize(dir)?;
            SysConfig::load(dir).map_err(CoreError::from)?
        }
        None => SysConfig::default(),
    };

    let resolved = SysOps::from_config(&config).map_err(CoreError::from)?;

    if OPS.set(resolved).is_err() {
        warn!("Operations already configured, keeping existing configuration");
        return Ok(());
    }

    info!(
        "Operations configured (interpreter: {} {}, chunk size: {})",
        ops().interpreter().program(),
        ops().interpreter().flag(),
        ops().chunk_size()
    );
    Ok(())
}
