use crate::core::{DatasetSource, Datasets, Result};

/// Serves the built-in demonstration datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl DatasetSource for SampleSource {
    fn load(&self) -> Result<Datasets> {
        tracing::debug!("Using built-in sample datasets");
        Ok(Datasets::sample())
    }
}
