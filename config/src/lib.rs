use std::{fs::File, path::Path};

use anyhow::{Error, Result};
use api::ApiConfig;
use dataset::DatasetConfig;
use log::LogConfig;
use serde::Deserialize;

pub mod api;
pub mod dataset;
pub mod log;

#[derive(Deserialize)]
pub struct Config {
    log: LogConfig,
    api: ApiConfig,
    dataset: DatasetConfig,
}

impl Config {
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn dataset(&self) -> &DatasetConfig {
        &self.dataset
    }
}

pub fn from_path(path: &Path) -> Result<Config> {
    let file = File::open(path)
        .map_err(|err| Error::msg(format!("Opening config '{}': {err}", path.display())))?;
    serde_yaml::from_reader(file)
        .map_err(|err| Error::msg(format!("Parsing config '{}': {err}", path.display())))
}

pub fn from_str(content: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(content)?)
}
