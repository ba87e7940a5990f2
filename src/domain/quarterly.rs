//! End-of-quarter performance report with achievement badges.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use super::company::CompanyRegistry;
use super::portfolio::Portfolio;
use super::sector::Sector;

const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingReturn {
    pub company: String,
    pub sector: Sector,
    pub shares: u64,
    pub return_pct: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Badge {
    OutstandingPerformance,
    StrongPerformance,
    SteadyGrowth,
    DiversificationMaster,
    StockPickingPro { company: String },
}

impl Badge {
    pub fn title(&self) -> &'static str {
        match self {
            Badge::OutstandingPerformance => "Outstanding Performance",
            Badge::StrongPerformance => "Strong Performance",
            Badge::SteadyGrowth => "Steady Growth",
            Badge::DiversificationMaster => "Diversification Master",
            Badge::StockPickingPro { .. } => "Stock Picking Pro",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::OutstandingPerformance => {
                write!(f, "{}: portfolio gained over 15% this quarter", self.title())
            }
            Badge::StrongPerformance => {
                write!(f, "{}: portfolio gained over 10% this quarter", self.title())
            }
            Badge::SteadyGrowth => {
                write!(f, "{}: portfolio gained over 5% this quarter", self.title())
            }
            Badge::DiversificationMaster => {
                write!(f, "{}: portfolio spread across 3+ sectors", self.title())
            }
            Badge::StockPickingPro { company } => {
                write!(f, "{}: {} gained over 20%", self.title(), company)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuarterlyReport {
    pub week: u32,
    pub start_value: f64,
    pub end_value: f64,
    pub percentage_gain: f64,
    pub holdings: Vec<HoldingReturn>,
    pub top_gainers: Vec<HoldingReturn>,
    /// Worst performer first.
    pub top_losers: Vec<HoldingReturn>,
    pub sector_distribution: BTreeMap<Sector, f64>,
    pub total_unrealized: f64,
    pub badges: Vec<Badge>,
}

impl QuarterlyReport {
    pub fn compute(
        week: u32,
        start_value: f64,
        end_value: f64,
        portfolio: &Portfolio,
        registry: &CompanyRegistry,
    ) -> Self {
        let percentage_gain = if start_value > 0.0 {
            (end_value - start_value) / start_value * 100.0
        } else {
            0.0
        };

        let holdings: Vec<HoldingReturn> = portfolio
            .holdings
            .iter()
            .filter_map(|h| {
                registry.get(&h.company).map(|c| HoldingReturn {
                    company: h.company.clone(),
                    sector: c.sector,
                    shares: h.shares,
                    return_pct: h.unrealized_return_pct(c.price),
                    profit: h.market_value(c.price) - h.cost_basis(),
                })
            })
            .collect();

        let mut sorted = holdings.clone();
        sorted.sort_by(|a, b| {
            b.return_pct
                .partial_cmp(&a.return_pct)
                .unwrap_or(Ordering::Equal)
        });
        let top_gainers: Vec<HoldingReturn> = sorted
            .iter()
            .filter(|r| r.return_pct > 0.0)
            .take(TOP_N)
            .cloned()
            .collect();
        let mut losers: Vec<HoldingReturn> = holdings
            .iter()
            .filter(|r| r.return_pct < 0.0)
            .cloned()
            .collect();
        losers.sort_by(|a, b| {
            a.return_pct
                .partial_cmp(&b.return_pct)
                .unwrap_or(Ordering::Equal)
        });
        losers.truncate(TOP_N);
        let top_losers = losers;

        let sector_distribution = portfolio.sector_allocation(registry);
        let total_unrealized = holdings.iter().map(|r| r.profit).sum();

        let mut badges = Vec::new();
        if percentage_gain > 15.0 {
            badges.push(Badge::OutstandingPerformance);
        } else if percentage_gain > 10.0 {
            badges.push(Badge::StrongPerformance);
        } else if percentage_gain > 5.0 {
            badges.push(Badge::SteadyGrowth);
        }
        if sector_distribution.len() >= 3 {
            badges.push(Badge::DiversificationMaster);
        }
        if let Some(best) = top_gainers.first().filter(|r| r.return_pct > 20.0) {
            badges.push(Badge::StockPickingPro {
                company: best.company.clone(),
            });
        }

        QuarterlyReport {
            week,
            start_value,
            end_value,
            percentage_gain,
            holdings,
            top_gainers,
            top_losers,
            sector_distribution,
            total_unrealized,
            badges,
        }
    }
}
