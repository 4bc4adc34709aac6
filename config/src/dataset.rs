use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct DatasetConfig {
    path: PathBuf,
    #[serde(default)]
    on_load_error: OnLoadError,
}

impl DatasetConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn on_load_error(&self) -> &OnLoadError {
        &self.on_load_error
    }
}

/// What startup does when the dataset source is missing or malformed.
#[derive(Deserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum OnLoadError {
    /// Refuse to start.
    #[default]
    Fail,
    /// Log the error and serve an empty dataset.
    Empty,
}
