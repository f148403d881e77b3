use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CallbackError {
    IoError(std::io::Error),
    IniError(ini::Error),
    MalformedFileName(PathBuf),
    InvalidConfig(String, String),
}

impl From<std::io::Error> for CallbackError {
    fn from(error: std::io::Error) -> Self {
        CallbackError::IoError(error)
    }
}

impl From<ini::Error> for CallbackError {
    fn from(error: ini::Error) -> Self {
        CallbackError::IniError(error)
    }
}

impl fmt::Display for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackError::IoError(e) => write!(f, "IO: {}", e),
            CallbackError::IniError(e) => write!(f, "IniError: {}", e),
            CallbackError::MalformedFileName(p) => {
                write!(f, "MalformedFileName: {}", p.display())
            }
            CallbackError::InvalidConfig(key, value) => {
                write!(f, "InvalidConfig: {} = {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for CallbackError {}
