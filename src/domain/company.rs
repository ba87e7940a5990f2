//! Company records and the registry the engine mutates each tick.

use std::collections::{HashMap, HashSet};

use super::error::SimvestorError;
use super::price_engine::price_change;
use super::sector::Sector;

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialYear {
    pub year: i32,
    pub revenue: f64,
    pub profit: f64,
    pub fcf: f64,
    pub pe: f64,
    pub roi: f64,
    pub roce: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyProfile {
    pub description: String,
    pub founded: i32,
    pub headquarters: String,
    pub employees: u32,
}

/// One tradable entity. Only `price` and `price_change` change during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    pub price: f64,
    /// Percentage move produced by the most recent price mutation.
    pub price_change: Option<f64>,
    pub sector: Sector,
    pub roe: f64,
    pub fcf: f64,
    pub market_cap: f64,
    pub pe_ratio: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roce: f64,
    pub assets: f64,
    pub debt: f64,
    pub debt_to_equity: f64,
    pub history: Vec<FinancialYear>,
    pub profile: CompanyProfile,
}

impl Company {
    /// A company with a price and sector and zeroed fundamentals.
    pub fn new(name: impl Into<String>, sector: Sector, price: f64) -> Self {
        Company {
            name: name.into(),
            price,
            price_change: None,
            sector,
            roe: 0.0,
            fcf: 0.0,
            market_cap: 0.0,
            pe_ratio: 0.0,
            revenue: 0.0,
            profit: 0.0,
            roce: 0.0,
            assets: 0.0,
            debt: 0.0,
            debt_to_equity: 0.0,
            history: Vec::new(),
            profile: CompanyProfile::default(),
        }
    }

    /// Store `new_price` clamped to `floor` and record the realized move.
    ///
    /// Returns the realized percentage change.
    pub fn reprice(&mut self, new_price: f64, floor: f64) -> f64 {
        let old_price = self.price;
        self.price = new_price.max(floor);
        let change = price_change(old_price, self.price);
        self.price_change = Some(change);
        change
    }

    /// Multiply the price by `1 + fraction`, clamped to `floor`.
    pub fn apply_move(&mut self, fraction: f64, floor: f64) -> f64 {
        self.reprice(self.price * (1.0 + fraction), floor)
    }
}

/// The set of companies in a session, keyed by unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    pub fn new(companies: Vec<Company>) -> Result<Self, SimvestorError> {
        let mut seen = HashSet::new();
        for company in &companies {
            if !seen.insert(company.name.as_str()) {
                return Err(SimvestorError::DuplicateCompany {
                    name: company.name.clone(),
                });
            }
        }
        Ok(Self { companies })
    }

    pub fn get(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Company> {
        self.companies.iter_mut().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Company> {
        self.companies.iter_mut()
    }

    pub fn in_sector(&self, sector: Sector) -> impl Iterator<Item = &Company> {
        self.companies.iter().filter(move |c| c.sector == sector)
    }

    pub fn in_sector_mut(&mut self, sector: Sector) -> impl Iterator<Item = &mut Company> {
        self.companies.iter_mut().filter(move |c| c.sector == sector)
    }

    pub fn names(&self) -> Vec<&str> {
        self.companies.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn price_map(&self) -> HashMap<String, f64> {
        self.companies
            .iter()
            .map(|c| (c.name.clone(), c.price))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> CompanyRegistry {
        CompanyRegistry::new(vec![
            Company::new("TechNova", Sector::Technology, 100.0),
            Company::new("ByteWorks", Sector::Technology, 85.0),
            Company::new("FinEdge", Sector::Finance, 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = CompanyRegistry::new(vec![
            Company::new("TechNova", Sector::Technology, 100.0),
            Company::new("TechNova", Sector::Finance, 10.0),
        ])
        .unwrap_err();
        assert!(matches!(err, SimvestorError::DuplicateCompany { name } if name == "TechNova"));
    }

    #[test]
    fn lookup_by_name() {
        let registry = sample_registry();
        assert_eq!(registry.get("FinEdge").unwrap().price, 50.0);
        assert!(registry.get("Missing").is_none());
        assert!(registry.contains("ByteWorks"));
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn in_sector_filters() {
        let registry = sample_registry();
        let names: Vec<_> = registry
            .in_sector(Sector::Technology)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["TechNova", "ByteWorks"]);
        assert_eq!(registry.in_sector(Sector::Energy).count(), 0);
    }

    #[test]
    fn reprice_records_change() {
        let mut company = Company::new("TechNova", Sector::Technology, 100.0);
        let change = company.reprice(110.0, 0.01);
        assert!((change - 10.0).abs() < 1e-9);
        assert_eq!(company.price, 110.0);
        assert_eq!(company.price_change, Some(change));
    }

    #[test]
    fn reprice_clamps_to_floor() {
        let mut company = Company::new("Penny", Sector::Energy, 1.0);
        company.reprice(-5.0, 0.01);
        assert_eq!(company.price, 0.01);
        assert!((company.price_change.unwrap() - (-99.0)).abs() < 1e-9);
    }

    #[test]
    fn apply_move_is_multiplicative() {
        let mut company = Company::new("FinEdge", Sector::Finance, 50.0);
        company.apply_move(0.04, 0.01);
        assert!((company.price - 52.0).abs() < 1e-9);
    }

    #[test]
    fn price_map_contains_all() {
        let registry = sample_registry();
        let map = registry.price_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["ByteWorks"], 85.0);
    }
}
