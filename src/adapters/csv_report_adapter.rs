//! CSV weekly history report adapter.
//!
//! One row per simulated week:
//! `week,headline,portfolio_value,sentiment,<company>...` with one price
//! column per company in registry order.

use crate::domain::error::SimvestorError;
use crate::domain::session::WeekOutcome;
use crate::ports::report_port::ReportPort;

#[derive(Debug, Default)]
pub struct CsvReportAdapter;

impl CsvReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn report_err(e: impl std::fmt::Display) -> SimvestorError {
    SimvestorError::Report {
        reason: format!("CSV write error: {}", e),
    }
}

impl ReportPort for CsvReportAdapter {
    fn write(&self, weeks: &[WeekOutcome], output_path: &str) -> Result<(), SimvestorError> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(|e| SimvestorError::Report {
            reason: format!("failed to create {}: {}", output_path, e),
        })?;

        let mut header = vec![
            "week".to_string(),
            "headline".to_string(),
            "portfolio_value".to_string(),
            "sentiment".to_string(),
        ];
        if let Some(first) = weeks.first() {
            header.extend(first.prices.iter().map(|(name, _)| name.clone()));
        }
        wtr.write_record(&header).map_err(report_err)?;

        for outcome in weeks {
            let mut row = vec![
                outcome.week.to_string(),
                outcome.headline.clone(),
                format!("{:.2}", outcome.total_value),
                format!("{:.4}", outcome.sentiment),
            ];
            row.extend(outcome.prices.iter().map(|(_, price)| format!("{:.2}", price)));
            wtr.write_record(&row).map_err(report_err)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
