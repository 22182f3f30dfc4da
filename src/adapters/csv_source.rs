use crate::core::{DatasetSource, Datasets};
use crate::utils::error::{AnalyticsError, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub const STUDENTS_FILE: &str = "students.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const BOOKS_FILE: &str = "books.csv";
pub const EMPLOYEES_FILE: &str = "employees.csv";

/// Reads one CSV file per record kind from a directory. Headers are the record
/// field names; a file that is not there yields an empty collection.
#[derive(Debug, Clone)]
pub struct CsvSource {
    dir: PathBuf,
}

impl CsvSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn read_records<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        if !path.exists() {
            tracing::warn!("⚠️ {} not found, treating it as empty", path.display());
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(&path)?;
        let records = reader
            .deserialize()
            .enumerate()
            .map(|(i, row)| {
                row.map_err(|e| AnalyticsError::DatasetError {
                    file: path.display().to_string(),
                    message: format!("row {}: {}", i + 1, e),
                })
            })
            .collect::<Result<Vec<T>>>()?;

        tracing::debug!("Read {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl DatasetSource for CsvSource {
    fn load(&self) -> Result<Datasets> {
        if !self.dir.is_dir() {
            return Err(AnalyticsError::ConfigError {
                message: format!("data directory '{}' does not exist", self.dir.display()),
            });
        }

        Ok(Datasets {
            students: self.read_records(STUDENTS_FILE)?,
            products: self.read_records(PRODUCTS_FILE)?,
            books: self.read_records(BOOKS_FILE)?,
            employees: self.read_records(EMPLOYEES_FILE)?,
        })
    }
}
