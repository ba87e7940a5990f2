//! News catalog storage port trait.

use crate::domain::error::SimvestorError;
use crate::domain::news::NewsCatalog;

pub trait CatalogPort {
    fn load(&self, path: &str) -> Result<NewsCatalog, SimvestorError>;
    fn save(&self, catalog: &NewsCatalog, path: &str) -> Result<(), SimvestorError>;
}
