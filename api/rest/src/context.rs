use std::sync::Arc;

use mb_dataset::Dataset;

pub struct ApiRestCtx {
    dataset: Arc<Dataset>,
}

impl ApiRestCtx {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
