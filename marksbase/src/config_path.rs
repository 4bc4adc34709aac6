use std::{fs, path::PathBuf};

pub fn get() -> PathBuf {
    let config_path = match std::env::var("MARKSBASE_CONFIG_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("config.yml"),
    };

    if fs::metadata(&config_path).is_err() {
        panic!(
            "{} must exist, either at the path in MARKSBASE_CONFIG_PATH or in the current directory",
            config_path.display()
        )
    }

    config_path
}
