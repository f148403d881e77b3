pub mod callback_file;
pub mod config;
pub mod error;
pub mod exe_path;
