pub mod books;
pub mod employees;
pub mod engine;
pub mod pipeline;
pub mod products;
pub mod students;

pub use crate::domain::model::{Book, Datasets, Employee, Product, Student};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, Pipeline, Storage};
pub use crate::domain::report::{Entry, Report, Section};
pub use crate::utils::error::Result;

/// Arithmetic mean, `0.0` for an empty sequence.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
