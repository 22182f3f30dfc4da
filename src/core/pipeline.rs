use crate::core::books::BookAnalytics;
use crate::core::employees::EmployeeAnalytics;
use crate::core::products::ProductAnalytics;
use crate::core::students::StudentAnalytics;
use crate::core::{ConfigProvider, DatasetSource, Datasets, Pipeline, Report, Storage};
use crate::utils::error::{AnalyticsError, Result};

pub const SUPPORTED_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AnalyticsError::InvalidConfigValueError {
                field: "output_formats".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            }),
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Text => "report.txt",
            Self::Json => "report.json",
        }
    }

    pub fn render(self, report: &Report) -> Result<String> {
        match self {
            Self::Text => Ok(report.render_text()),
            Self::Json => report.to_json(),
        }
    }
}

/// Loads the datasets from `source`, runs every analytics service over them and
/// writes the rendered report through `storage` in each configured format.
pub struct AnalyticsPipeline<Src: DatasetSource, St: Storage, C: ConfigProvider> {
    source: Src,
    storage: St,
    config: C,
    students: StudentAnalytics,
    products: ProductAnalytics,
    books: BookAnalytics,
    employees: EmployeeAnalytics,
}

impl<Src: DatasetSource, St: Storage, C: ConfigProvider> AnalyticsPipeline<Src, St, C> {
    pub fn new(source: Src, storage: St, config: C) -> Self {
        Self {
            source,
            storage,
            config,
            students: StudentAnalytics::new(),
            products: ProductAnalytics::new(),
            books: BookAnalytics::new(),
            employees: EmployeeAnalytics::new(),
        }
    }
}

impl<Src: DatasetSource, St: Storage, C: ConfigProvider> Pipeline for AnalyticsPipeline<Src, St, C> {
    fn extract(&self) -> Result<Datasets> {
        self.source.load()
    }

    fn transform(&self, data: Datasets) -> Result<Report> {
        let mut report = Report::new(self.config.report_title());
        report.push_section(self.students.section(&data.students));
        report.push_section(self.products.section(&data.products));
        report.push_section(self.books.section(&data.books));
        report.push_section(
            self.employees
                .section(&data.employees, self.config.youngest_count()),
        );
        Ok(report)
    }

    fn load(&self, report: &Report) -> Result<Vec<String>> {
        if !self.config.write_outputs() {
            tracing::debug!("Output writing disabled, skipping load phase");
            return Ok(Vec::new());
        }

        let mut written = Vec::new();
        for name in self.config.output_formats() {
            let format = OutputFormat::parse(name)?;
            let rendered = format.render(report)?;
            tracing::debug!("Writing {:?} report ({} bytes)", format, rendered.len());
            written.push(self.storage.write_file(format.file_name(), rendered.as_bytes())?);
        }
        Ok(written)
    }
}
