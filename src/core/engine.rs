use crate::core::{Pipeline, Report};
use crate::utils::error::Result;
use std::time::{Duration, Instant};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: Report,
    pub written: Vec<String>,
    pub records: usize,
    pub elapsed: Duration,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        tracing::info!("🚀 Starting analytics run");

        // Extract
        tracing::info!("📥 Loading datasets...");
        let data = self.pipeline.extract()?;
        let records = data.total_records();
        tracing::info!(
            "Loaded {} records ({} students, {} products, {} books, {} employees)",
            records,
            data.students.len(),
            data.products.len(),
            data.books.len(),
            data.employees.len()
        );
        if data.is_empty() {
            tracing::warn!("⚠️ Every dataset is empty; the report will only contain defaults");
        }

        // Transform
        tracing::info!("⚙️ Building report...");
        let report = self.pipeline.transform(data)?;
        tracing::info!("Built {} report sections", report.sections.len());

        // Load
        tracing::info!("💾 Writing outputs...");
        let written = self.pipeline.load(&report)?;
        for path in &written {
            tracing::info!("📁 Output saved to: {}", path);
        }

        let elapsed = started.elapsed();
        tracing::info!("✅ Analytics run finished in {:?}", elapsed);

        Ok(RunSummary {
            report,
            written,
            records,
            elapsed,
        })
    }
}
