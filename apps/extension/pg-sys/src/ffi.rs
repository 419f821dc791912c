//! C entry points.
//!
//! Arguments and results use the host byte string layout: a 4-byte native-endian
//! header holding the total size (header included), then the payload. Results
//! are allocated here and must be released with [`sys_free`].
//!
//! Panics never cross the boundary; they are logged and turned into the same
//! sentinels as other failures.

use crate::error::PgSysError;
use crate::state;

use common::ErrorLocation;
use models::{ExitStatus, HOST_HEADER_SIZE, HostByteString};
use sys_core::HexText;
use sys_core::marshal::to_host_byte_string;

use std::ffi::{CStr, c_char};
use std::panic::{Location, UnwindSafe, catch_unwind};
use std::path::PathBuf;
use std::ptr;
use std::slice;

use log::error;

const INIT_OK: i32 = 0;
const INIT_FAILED: i32 = -1;

/// Load configuration from `config_dir` and install the logger there.
///
/// Returns 0 on success and -1 on failure. A null `config_dir` keeps the defaults.
///
/// # Safety
///
/// `config_dir` must be null or point to a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pg_sys_init(config_dir: *const c_char) -> i32 {
    let dir = if config_dir.is_null() {
        None
    } else {
        // SAFETY: caller guarantees a valid NUL-terminated string
        let bytes = unsafe { CStr::from_ptr(config_dir) }.to_bytes();
        Some(path_from_bytes(bytes))
    };

    guard(INIT_FAILED, move || match state::configure(dir.as_deref()) {
        Ok(()) => INIT_OK,
        Err(e) => {
            error!("pg_sys_init failed: {e}");
            INIT_FAILED
        }
    })
}

/// Run a command and return its exit status, or -1 if it could not be started.
///
/// # Safety
///
/// `arg` must be null or point to a readable host byte string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_exec(arg: *const u8) -> i32 {
    // SAFETY: forwarded caller guarantee
    let command = match unsafe { read_host_arg(arg) } {
        Ok(command) => command,
        Err(e) => {
            error!("sys_exec: {e}");
            return ExitStatus::SPAWN_FAILURE.code();
        }
    };

    guard(ExitStatus::SPAWN_FAILURE.code(), move || {
        state::ops().exec(&command).code()
    })
}

/// Run a command and return its stdout as hex text, or null on failure.
///
/// # Safety
///
/// `arg` must be null or point to a readable host byte string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_eval(arg: *const u8) -> *mut u8 {
    // SAFETY: forwarded caller guarantee
    let command = match unsafe { read_host_arg(arg) } {
        Ok(command) => command,
        Err(e) => {
            error!("sys_eval: {e}");
            return ptr::null_mut();
        }
    };

    guard(ptr::null_mut(), move || match state::ops().eval(&command) {
        Ok(text) => into_host_result(&text),
        Err(e) => {
            error!("sys_eval: {e}");
            ptr::null_mut()
        }
    })
}

/// Read a whole file and return it as hex text, or null if it cannot be read.
///
/// # Safety
///
/// `arg` must be null or point to a readable host byte string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_fileread(arg: *const u8) -> *mut u8 {
    // SAFETY: forwarded caller guarantee
    let path = match unsafe { read_host_arg(arg) } {
        Ok(path) => path,
        Err(e) => {
            error!("sys_fileread: {e}");
            return ptr::null_mut();
        }
    };

    guard(ptr::null_mut(), move || match state::ops().read_file(&path) {
        Ok(Some(text)) => into_host_result(&text),
        Ok(None) => ptr::null_mut(),
        Err(e) => {
            error!("sys_fileread: {e}");
            ptr::null_mut()
        }
    })
}

/// Release a value returned by [`sys_eval`] or [`sys_fileread`].
///
/// # Safety
///
/// `value` must be null or a pointer returned by this library that has not been
/// freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_free(value: *mut u8) {
    if value.is_null() {
        return;
    }

    // SAFETY: values returned by this library start with a valid header
    let total = unsafe { read_declared_size(value) };

    // SAFETY: allocated by `into_host_result` as a boxed slice of exactly `total` bytes
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(value, total)) });
}

/// Copy a host argument into an owned value.
///
/// # Safety
///
/// `arg` must be null or point to at least `HOST_HEADER_SIZE` readable bytes,
/// followed by as many more as the header declares.
#[track_caller]
pub(crate) unsafe fn read_host_arg(arg: *const u8) -> Result<HostByteString, PgSysError> {
    if arg.is_null() {
        return Err(PgSysError::Argument {
            message: String::from("Argument is null"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // SAFETY: caller guarantees the header is readable
    let total = unsafe { read_declared_size(arg) };
    if total < HOST_HEADER_SIZE {
        return Err(PgSysError::Argument {
            message: format!("Header declares {total} bytes, less than the header itself"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // SAFETY: caller guarantees `total` readable bytes
    let raw = unsafe { slice::from_raw_parts(arg, total) }.to_vec();

    HostByteString::from_raw(raw).map_err(|e| PgSysError::Argument {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// # Safety
///
/// `value` must point to at least `HOST_HEADER_SIZE` readable bytes.
unsafe fn read_declared_size(value: *const u8) -> usize {
    let mut header = [0u8; HOST_HEADER_SIZE];
    // SAFETY: caller guarantees the header is readable; it may be unaligned
    unsafe { ptr::copy_nonoverlapping(value, header.as_mut_ptr(), HOST_HEADER_SIZE) };
    HostByteString::declared_size(header)
}

/// Hand `text` to the host as a freshly allocated host byte string.
fn into_host_result(text: &HexText) -> *mut u8 {
    match to_host_byte_string(text.as_bytes()) {
        Ok(value) => {
            let boxed: Box<[u8]> = value.into_raw().into_boxed_slice();
            Box::into_raw(boxed) as *mut u8
        }
        Err(e) => {
            error!("Failed to marshal result: {e}");
            ptr::null_mut()
        }
    }
}

fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
    }

    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
    }
}

fn guard<T>(fallback: T, operation: impl FnOnce() -> T + UnwindSafe) -> T {
    match catch_unwind(operation) {
        Ok(value) => value,
        Err(_) => {
            error!("Operation panicked");
            fallback
        }
    }
}
