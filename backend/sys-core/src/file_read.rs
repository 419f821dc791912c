//! Read a whole file and return its content as hex text.

use crate::error::file_read::FileReadError;
use crate::hex::{HexText, try_encode};
use crate::marshal::{to_os_string, to_owned_buffer};
use crate::ops::SysOps;

use common::ErrorLocation;
use models::HostByteString;

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, warn};

impl SysOps {
    /// Read the file at `path` in full.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(HexText))` - the whole content, hex-encoded
    /// * `Ok(None)` - the file cannot be opened (missing, permission denied, a
    ///   directory) or its content does not fit in memory
    /// * `Err(FileReadError)` - seeking or reading failed, or fewer bytes were read
    ///   than the file's measured length
    #[track_caller]
    pub fn read_file(&self, path: &HostByteString) -> Result<Option<HexText>, FileReadError> {
        let buffer = to_owned_buffer(path)?;

        self.log_request("File read", &buffer);

        let path = PathBuf::from(to_os_string(&buffer));
        let mut file = match open_regular_file(&path) {
            Some(file) => file,
            None => return Ok(None),
        };

        let length = file.seek(SeekFrom::End(0)).map_err(|e| FileReadError::Seek {
            message: format!("Failed to seek to end of file: {e}"),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

        file.seek(SeekFrom::Start(0))
            .map_err(|e| FileReadError::Seek {
                message: format!("Failed to seek to start of file: {e}"),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        let expected = usize::try_from(length).map_err(|_| FileReadError::TooLarge {
            message: format!("File of {length} bytes exceeds the address space"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut content = Vec::new();
        if let Err(e) = content.try_reserve_exact(expected) {
            warn!("Cannot allocate {expected} bytes for file content: {e}");
            return Ok(None);
        }

        let actual = file
            .by_ref()
            .take(length)
            .read_to_end(&mut content)
            .map_err(|e| FileReadError::Read {
                message: format!("Failed to read file content: {e}"),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        if actual != expected {
            return Err(FileReadError::ShortRead {
                expected,
                actual,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match try_encode(&content) {
            Ok(text) => {
                debug!("File content encoded ({actual} bytes)");
                Ok(Some(text))
            }
            Err(e) => {
                warn!("Cannot allocate hex text for {actual} bytes: {e}");
                Ok(None)
            }
        }
    }
}

fn open_regular_file(path: &Path) -> Option<File> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("File open failed: {e}");
            return None;
        }
    };

    match file.metadata() {
        Ok(metadata) if metadata.is_dir() => {
            debug!("File open failed: path is a directory");
            None
        }
        _ => Some(file),
    }
}
