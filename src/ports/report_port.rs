//! Report generation port trait.

use crate::domain::error::SimvestorError;
use crate::domain::session::WeekOutcome;

/// Port for writing the week-by-week history of a simulation run.
pub trait ReportPort {
    fn write(&self, weeks: &[WeekOutcome], output_path: &str) -> Result<(), SimvestorError>;
}
