pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CsvSource, LocalStorage, SampleSource};
pub use core::{
    books::BookAnalytics, employees::EmployeeAnalytics, engine::ReportEngine,
    pipeline::AnalyticsPipeline, products::ProductAnalytics, students::StudentAnalytics,
};
pub use domain::model::{Book, Datasets, Employee, Product, Student};
pub use domain::report::Report;
pub use utils::error::{AnalyticsError, Result};
