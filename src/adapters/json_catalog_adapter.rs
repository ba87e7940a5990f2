//! JSON news catalog adapter.
//!
//! The file holds a JSON array of news items; each effect carries a `kind`
//! tag, e.g. `{"kind":"sector_shock","sector":"Energy",...}`.

use std::fs;

use crate::domain::error::SimvestorError;
use crate::domain::news::NewsCatalog;
use crate::ports::catalog_port::CatalogPort;

#[derive(Debug, Default)]
pub struct JsonCatalogAdapter;

impl JsonCatalogAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogPort for JsonCatalogAdapter {
    fn load(&self, path: &str) -> Result<NewsCatalog, SimvestorError> {
        let content = fs::read_to_string(path).map_err(|e| SimvestorError::Catalog {
            reason: format!("failed to read {}: {}", path, e),
        })?;
        serde_json::from_str(&content).map_err(|e| SimvestorError::Catalog {
            reason: format!("invalid catalog {}: {}", path, e),
        })
    }

    fn save(&self, catalog: &NewsCatalog, path: &str) -> Result<(), SimvestorError> {
        let json = serde_json::to_string_pretty(catalog).map_err(|e| SimvestorError::Catalog {
            reason: format!("failed to serialize catalog: {}", e),
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}
