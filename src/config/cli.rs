use crate::config::toml_config::{TomlConfig, DEFAULT_OUTPUT_PATH, DEFAULT_TITLE};
use crate::core::employees::DEFAULT_YOUNGEST_COUNT;
use crate::core::pipeline::SUPPORTED_FORMATS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "record-analytics")]
#[command(about = "Filter, sort, group and aggregate record collections into a report")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory with students.csv, products.csv, books.csv and employees.csv (built-in sample data if omitted)
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    /// Report formats to write: text, json
    #[arg(long, value_delimiter = ',')]
    pub formats: Option<Vec<String>>,

    /// How many of the youngest employees to list
    #[arg(long)]
    pub youngest: Option<usize>,

    #[arg(long)]
    pub title: Option<String>,

    /// Print the report without writing any files
    #[arg(long)]
    pub no_write: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

fn default_formats() -> &'static [String] {
    static FORMATS: OnceLock<Vec<String>> = OnceLock::new();
    FORMATS.get_or_init(|| vec!["text".to_string()])
}

impl CliConfig {
    /// Fills every setting not given on the command line from `file`.
    pub fn merge_file(&mut self, file: TomlConfig) {
        self.data_dir = self.data_dir.take().or(file.source.data_dir);
        self.output_path = self.output_path.take().or(Some(file.output.path));
        self.formats = self.formats.take().or(Some(file.output.formats));
        self.youngest = self.youngest.or(Some(file.analytics.youngest_count));
        self.title = self.title.take().or(Some(file.report.title));
    }
}

impl ConfigProvider for CliConfig {
    fn report_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_formats(&self) -> &[String] {
        self.formats.as_deref().unwrap_or(default_formats())
    }

    fn data_dir(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    fn youngest_count(&self) -> usize {
        self.youngest.unwrap_or(DEFAULT_YOUNGEST_COUNT)
    }

    fn write_outputs(&self) -> bool {
        !self.no_write
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("title", self.report_title())?;
        validation::validate_path("output_path", self.output_path())?;
        if let Some(dir) = self.data_dir() {
            validation::validate_path("data_dir", dir)?;
        }
        validation::validate_positive_number("youngest", self.youngest_count(), 1)?;
        validation::validate_choices("formats", self.output_formats(), &SUPPORTED_FORMATS)?;
        Ok(())
    }
}
