// Adapters layer: concrete dataset sources and storage backends behind the domain ports.

pub mod csv_source;
pub mod sample_source;
pub mod storage;

pub use csv_source::CsvSource;
pub use sample_source::SampleSource;
pub use storage::LocalStorage;
