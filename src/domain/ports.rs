use crate::domain::model::Datasets;
use crate::domain::report::Report;
use crate::utils::error::Result;

/// Where the record collections come from.
pub trait DatasetSource {
    fn load(&self) -> Result<Datasets>;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn report_title(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn data_dir(&self) -> Option<&str>;
    fn youngest_count(&self) -> usize;

    fn write_outputs(&self) -> bool {
        true
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Datasets>;
    fn transform(&self, data: Datasets) -> Result<Report>;
    fn load(&self, report: &Report) -> Result<Vec<String>>;
}
