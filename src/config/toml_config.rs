use crate::core::employees::DEFAULT_YOUNGEST_COUNT;
use crate::core::pipeline::SUPPORTED_FORMATS;
use crate::core::ConfigProvider;
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_TITLE: &str = "RECORD ANALYTICS REPORT";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub source: SourceConfig,
    pub analytics: AnalyticsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Directory holding students.csv, products.csv, books.csv and employees.csv.
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub youngest_count: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            youngest_count: DEFAULT_YOUNGEST_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            formats: vec!["text".to_string()],
        }
    }
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalyticsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalyticsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references with environment values; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("report.title", &self.report.title)?;
        validation::validate_path("output.path", &self.output.path)?;
        if let Some(dir) = &self.source.data_dir {
            validation::validate_path("source.data_dir", dir)?;
        }
        validation::validate_positive_number("analytics.youngest_count", self.analytics.youngest_count, 1)?;
        validation::validate_choices("output.formats", &self.output.formats, &SUPPORTED_FORMATS)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn report_title(&self) -> &str {
        &self.report.title
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn data_dir(&self) -> Option<&str> {
        self.source.data_dir.as_deref()
    }

    fn youngest_count(&self) -> usize {
        self.analytics.youngest_count
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
