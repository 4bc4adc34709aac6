use mb_config::dataset::{DatasetConfig, OnLoadError};
use mb_dataset::Dataset;

/// Loads the configured dataset, applying `on_load_error` when the source
/// cannot be used.
pub fn load(config: &DatasetConfig) -> Dataset {
    match Dataset::load(config.path()) {
        Ok(dataset) => dataset,
        Err(err) => match config.on_load_error() {
            OnLoadError::Fail => {
                mb_log::panic(None, format!("[Marksbase] Loading dataset failed: {err}"))
            }
            OnLoadError::Empty => {
                mb_log::warn(
                    None,
                    format!("[Marksbase] Loading dataset failed, serving an empty dataset: {err}"),
                );
                Dataset::empty()
            }
        },
    }
}
