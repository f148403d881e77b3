use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::StripMode;
use crate::error::CallbackError;

/// Length of the extension removed in `StripMode::Fixed`, e.g. ".exe".
pub const FIXED_EXTENSION_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExeLocation {
    pub dir: PathBuf,
    pub base_name: OsString,
}

pub fn current_exe_path() -> Result<PathBuf, CallbackError> {
    let path = std::env::current_exe()?;
    debug!("Running executable: {}", path.display());
    return Ok(path);
}

/// Split an executable path into its directory and its name without extension.
pub fn split_exe_path(path: &Path, strip_mode: StripMode) -> Result<ExeLocation, CallbackError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CallbackError::MalformedFileName(path.to_path_buf()))?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let base_name = match strip_mode {
        StripMode::LastDot => Path::new(file_name)
            .file_stem()
            .unwrap_or(file_name)
            .to_os_string(),
        StripMode::Fixed => {
            let name = file_name
                .to_str()
                .ok_or_else(|| CallbackError::MalformedFileName(path.to_path_buf()))?;
            match name.char_indices().rev().nth(FIXED_EXTENSION_LEN - 1) {
                Some((cut, _)) if cut > 0 => OsString::from(&name[..cut]),
                _ => return Err(CallbackError::MalformedFileName(path.to_path_buf())),
            }
        }
    };

    return Ok(ExeLocation { dir, base_name });
}

pub fn output_path(location: &ExeLocation, extension: &str) -> PathBuf {
    let mut file_name = location.base_name.clone();
    file_name.push(".");
    file_name.push(extension);
    return location.dir.join(file_name);
}
