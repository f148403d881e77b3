use log::{debug, info};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::CallbackError;
use crate::exe_path::{output_path, split_exe_path};

/// Create or truncate `path` and write every argument into it back to back.
///
/// No separator, no trailing newline. Returns the number of bytes written.
pub fn write_callback_file<I, S>(path: &Path, arguments: I) -> Result<usize, CallbackError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    for arg in arguments {
        let bytes = arg_bytes(arg.as_ref());
        writer.write_all(&bytes)?;
        written += bytes.len();
    }
    writer.flush()?;
    // Sync so late write errors are reported here rather than lost in Drop.
    writer
        .into_inner()
        .map_err(|e| e.into_error())?
        .sync_all()?;
    return Ok(written);
}

/// Resolve the callback file next to `exe_path` and dump `arguments` into it.
pub fn dump_arguments<I, S>(
    exe_path: &Path,
    config: &Config,
    arguments: I,
) -> Result<PathBuf, CallbackError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let location = split_exe_path(exe_path, config.strip_mode)?;
    let path = output_path(&location, &config.extension);
    debug!("Writing arguments to {}", path.display());
    let written = write_callback_file(&path, arguments)?;
    info!("Wrote {} bytes to {}", written, path.display());
    return Ok(path);
}

#[cfg(unix)]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

// Windows hands out UTF-16 arguments, the file holds them in the ANSI code page.
#[cfg(windows)]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use local_encoding::{Encoder, Encoding};
    let text = arg.to_string_lossy();
    match Encoding::ANSI.to_bytes(&text) {
        Ok(bytes) => Cow::Owned(bytes),
        Err(err) => {
            log::warn!("Cannot encode {:?} in the ANSI code page, writing UTF-8. {}", text, err);
            Cow::Owned(text.into_owned().into_bytes())
        }
    }
}

#[cfg(not(any(unix, windows)))]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
