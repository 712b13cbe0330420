use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::SheetLayout;
use crate::domain::entities::sales::LoadReport;
use crate::usecase::ports::source::{SalesSource, SourceError};
use crate::usecase::services::sales_aggregator::aggregate_rows;

pub struct ImportService {
    source: Arc<dyn SalesSource>,
    layout: SheetLayout,
}

impl ImportService {
    pub fn new(source: Arc<dyn SalesSource>, layout: SheetLayout) -> Self {
        Self { source, layout }
    }

    /// Read the workbook at `path` and rebuild the aggregate from scratch.
    pub fn load(&self, path: &Path) -> Result<LoadReport, SourceError> {
        info!(path = %path.display(), "loading sales workbook");
        let rows = self.source.read_rows(path)?;
        let report = aggregate_rows(&rows, &self.layout);
        info!(
            processed = report.processed_rows,
            skipped = report.skipped_rows,
            years = report.aggregate.years().len(),
            "sales workbook loaded"
        );
        if report.aggregate.is_empty() {
            warn!(path = %path.display(), "no sales rows recognised");
        }
        Ok(report)
    }
}
