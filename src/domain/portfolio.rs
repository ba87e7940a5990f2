//! Player portfolio: cash, holdings, and the weekly value history.

use std::collections::BTreeMap;

use super::company::CompanyRegistry;
use super::error::SimvestorError;
use super::sector::Sector;

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRecord {
    pub week: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub company: String,
    pub shares: u64,
    pub avg_buy_price: f64,
}

impl Holding {
    pub fn market_value(&self, price: f64) -> f64 {
        self.shares as f64 * price
    }

    pub fn cost_basis(&self) -> f64 {
        self.shares as f64 * self.avg_buy_price
    }

    /// Percentage gain of `price` over the average buy price.
    pub fn unrealized_return_pct(&self, price: f64) -> f64 {
        (price - self.avg_buy_price) / self.avg_buy_price * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub cash: f64,
    pub initial_cash: f64,
    pub holdings: Vec<Holding>,
    pub weekly_returns: Vec<WeeklyRecord>,
}

impl Portfolio {
    /// New portfolio with the opening `{week 0, initial_cash}` record.
    pub fn new(initial_cash: f64) -> Self {
        Portfolio {
            cash: initial_cash,
            initial_cash,
            holdings: Vec::new(),
            weekly_returns: vec![WeeklyRecord {
                week: 0,
                value: initial_cash,
            }],
        }
    }

    pub fn get_holding(&self, name: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.company == name)
    }

    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Buy `shares` of `name` at its current price.
    pub fn buy(
        &mut self,
        registry: &CompanyRegistry,
        name: &str,
        shares: u64,
    ) -> Result<(), SimvestorError> {
        if shares == 0 {
            return Err(SimvestorError::InvalidShares { shares });
        }
        let company = registry
            .get(name)
            .ok_or_else(|| SimvestorError::UnknownCompany {
                name: name.to_string(),
            })?;
        let cost = company.price * shares as f64;
        if cost > self.cash {
            return Err(SimvestorError::InsufficientCash {
                needed: cost,
                available: self.cash,
            });
        }

        match self.holdings.iter_mut().find(|h| h.company == name) {
            Some(holding) => {
                let total_shares = holding.shares + shares;
                holding.avg_buy_price = (holding.cost_basis() + cost) / total_shares as f64;
                holding.shares = total_shares;
            }
            None => self.holdings.push(Holding {
                company: name.to_string(),
                shares,
                avg_buy_price: company.price,
            }),
        }
        self.cash -= cost;
        Ok(())
    }

    /// Sell `shares` of `name` at its current price. Empty holdings are dropped.
    pub fn sell(
        &mut self,
        registry: &CompanyRegistry,
        name: &str,
        shares: u64,
    ) -> Result<(), SimvestorError> {
        if shares == 0 {
            return Err(SimvestorError::InvalidShares { shares });
        }
        let price = registry
            .get(name)
            .map(|c| c.price)
            .ok_or_else(|| SimvestorError::UnknownCompany {
                name: name.to_string(),
            })?;
        let held = self.get_holding(name).map(|h| h.shares).unwrap_or(0);
        if shares > held {
            return Err(SimvestorError::InsufficientShares {
                name: name.to_string(),
                requested: shares,
                held,
            });
        }

        for holding in self.holdings.iter_mut().filter(|h| h.company == name) {
            holding.shares -= shares;
        }
        self.holdings.retain(|h| h.shares > 0);
        self.cash += price * shares as f64;
        Ok(())
    }

    /// Cash plus every holding at its current registry price.
    pub fn total_value(&self, registry: &CompanyRegistry) -> f64 {
        let holdings_value: f64 = self
            .holdings
            .iter()
            .filter_map(|h| registry.get(&h.company).map(|c| h.market_value(c.price)))
            .sum();
        self.cash + holdings_value
    }

    /// Market value of holdings grouped by sector.
    pub fn sector_allocation(&self, registry: &CompanyRegistry) -> BTreeMap<Sector, f64> {
        let mut allocation = BTreeMap::new();
        for holding in &self.holdings {
            if let Some(company) = registry.get(&holding.company) {
                *allocation.entry(company.sector).or_insert(0.0) +=
                    holding.market_value(company.price);
            }
        }
        allocation
    }

    pub fn record_week(&mut self, week: u32, value: f64) {
        self.weekly_returns.push(WeeklyRecord { week, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::Company;

    fn registry() -> CompanyRegistry {
        CompanyRegistry::new(vec![
            Company::new("TechNova", Sector::Technology, 100.0),
            Company::new("ByteWorks", Sector::Technology, 80.0),
            Company::new("FinEdge", Sector::Finance, 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn new_portfolio() {
        let portfolio = Portfolio::new(10_000.0);
        assert!((portfolio.cash - 10_000.0).abs() < f64::EPSILON);
        assert!(portfolio.holdings.is_empty());
        assert_eq!(
            portfolio.weekly_returns,
            vec![WeeklyRecord {
                week: 0,
                value: 10_000.0
            }]
        );
    }

    #[test]
    fn buy_deducts_cash_and_adds_holding() {
        let reg = registry();
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.buy(&reg, "TechNova", 10).unwrap();
        assert!((portfolio.cash - 9_000.0).abs() < f64::EPSILON);
        let holding = portfolio.get_holding("TechNova").unwrap();
        assert_eq!(holding.shares, 10);
        assert!((holding.avg_buy_price - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buy_merges_with_weighted_average() {
        let mut reg = registry();
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.buy(&reg, "TechNova", 10).unwrap();
        reg.get_mut("TechNova").unwrap().price = 130.0;
        portfolio.buy(&reg, "TechNova", 20).unwrap();

        assert_eq!(portfolio.holding_count(), 1);
        let holding = portfolio.get_holding("TechNova").unwrap();
        assert_eq!(holding.shares, 30);
        assert!((holding.avg_buy_price - 120.0).abs() < 1e-9);
        assert!((portfolio.cash - 6_400.0).abs() < 1e-9);
    }

    #[test]
    fn buy_rejects_insufficient_cash() {
        let reg = registry();
        let mut portfolio = Portfolio::new(500.0);
        let err = portfolio.buy(&reg, "TechNova", 6).unwrap_err();
        assert!(matches!(err, SimvestorError::InsufficientCash { .. }));
        assert!((portfolio.cash - 500.0).abs() < f64::EPSILON);
        assert!(portfolio.holdings.is_empty());
    }

    #[test]
    fn buy_rejects_zero_and_unknown() {
        let reg = registry();
        let mut portfolio = Portfolio::new(500.0);
        assert!(matches!(
            portfolio.buy(&reg, "TechNova", 0),
            Err(SimvestorError::InvalidShares { shares: 0 })
        ));
        assert!(matches!(
            portfolio.buy(&reg, "Nope", 1),
            Err(SimvestorError::UnknownCompany { .. })
        ));
    }

    #[test]
    fn sell_partial_and_full() {
        let mut reg = registry();
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.buy(&reg, "FinEdge", 40).unwrap();
        reg.get_mut("FinEdge").unwrap().price = 60.0;

        portfolio.sell(&reg, "FinEdge", 10).unwrap();
        assert_eq!(portfolio.get_holding("FinEdge").unwrap().shares, 30);
        assert!((portfolio.cash - 8_600.0).abs() < 1e-9);

        portfolio.sell(&reg, "FinEdge", 30).unwrap();
        assert!(portfolio.get_holding("FinEdge").is_none());
        assert!((portfolio.cash - 10_400.0).abs() < 1e-9);
    }

    #[test]
    fn sell_more_than_held() {
        let reg = registry();
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.buy(&reg, "FinEdge", 5).unwrap();
        let err = portfolio.sell(&reg, "FinEdge", 6).unwrap_err();
        assert!(matches!(
            err,
            SimvestorError::InsufficientShares { requested: 6, held: 5, .. }
        ));
        let err = portfolio.sell(&reg, "ByteWorks", 1).unwrap_err();
        assert!(matches!(
            err,
            SimvestorError::InsufficientShares { held: 0, .. }
        ));
    }

    #[test]
    fn total_value_uses_current_prices() {
        let mut reg = registry();
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.buy(&reg, "TechNova", 10).unwrap();
        portfolio.buy(&reg, "FinEdge", 20).unwrap();
        assert!((portfolio.total_value(&reg) - 10_000.0).abs() < 1e-9);

        reg.get_mut("TechNova").unwrap().price = 150.0;
        assert!((portfolio.total_value(&reg) - 10_500.0).abs() < 1e-9);
        assert_eq!(portfolio.total_value(&reg), portfolio.total_value(&reg));
    }

    #[test]
    fn sector_allocation_groups_holdings() {
        let reg = registry();
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.buy(&reg, "TechNova", 10).unwrap();
        portfolio.buy(&reg, "ByteWorks", 5).unwrap();
        portfolio.buy(&reg, "FinEdge", 2).unwrap();
        let allocation = portfolio.sector_allocation(&reg);
        assert_eq!(allocation.len(), 2);
        assert!((allocation[&Sector::Technology] - 1_400.0).abs() < 1e-9);
        assert!((allocation[&Sector::Finance] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn holding_returns() {
        let holding = Holding {
            company: "TechNova".into(),
            shares: 10,
            avg_buy_price: 80.0,
        };
        assert!((holding.unrealized_return_pct(100.0) - 25.0).abs() < 1e-9);
        assert!((holding.market_value(100.0) - 1_000.0).abs() < 1e-9);
        assert!((holding.cost_basis() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn record_week_appends() {
        let mut portfolio = Portfolio::new(10_000.0);
        portfolio.record_week(1, 10_250.0);
        assert_eq!(portfolio.weekly_returns.len(), 2);
        assert_eq!(portfolio.weekly_returns[1].week, 1);
    }
}
