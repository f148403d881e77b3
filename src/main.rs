#![windows_subsystem = "windows"]

use env_logger::Env;
use log::{error, warn};

use std::env;
use std::path::Path;
use std::process::ExitCode;

use url_callback::callback_file::dump_arguments;
use url_callback::config::{config_path, Config};
use url_callback::exe_path::current_exe_path;

// Every argument is opaque callback data, so there is no flag parsing here.
fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or("URL_CALLBACK_LOG", "warn")).init();

    let (config, result) = match current_exe_path() {
        Ok(exe) => {
            let config = load_config(&exe);
            let result = dump_arguments(&exe, &config, env::args_os().skip(1));
            (config, result)
        }
        Err(err) => (Config::default(), Err(err)),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Cannot write callback file. {}", err);
            if config.strict_exit {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn load_config(exe: &Path) -> Config {
    let path = config_path(exe);
    Config::load(&path).unwrap_or_else(|err| {
        warn!("Ignoring config {}. {}", path.display(), err);
        Config::default()
    })
}
