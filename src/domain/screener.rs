//! Stock screener: filter the registry by sector and fundamental predicates.
//!
//! Filters are written as `metric op value`, e.g. `pe_ratio<20` or
//! `market_cap >= 1e11`. Results are sorted by a chosen metric.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::company::{Company, CompanyRegistry};
use super::sector::Sector;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScreenerError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    #[error("missing comparison operator in '{0}'")]
    MissingOperator(String),

    #[error("invalid value '{value}' in filter '{filter}'")]
    InvalidValue { filter: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Price,
    Roe,
    Fcf,
    MarketCap,
    PeRatio,
    DebtToEquity,
    Revenue,
    Profit,
    Roce,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Price,
        Metric::Roe,
        Metric::Fcf,
        Metric::MarketCap,
        Metric::PeRatio,
        Metric::DebtToEquity,
        Metric::Revenue,
        Metric::Profit,
        Metric::Roce,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::Roe => "roe",
            Metric::Fcf => "fcf",
            Metric::MarketCap => "market_cap",
            Metric::PeRatio => "pe_ratio",
            Metric::DebtToEquity => "debt_to_equity",
            Metric::Revenue => "revenue",
            Metric::Profit => "profit",
            Metric::Roce => "roce",
        }
    }

    pub fn value(self, company: &Company) -> f64 {
        match self {
            Metric::Price => company.price,
            Metric::Roe => company.roe,
            Metric::Fcf => company.fcf,
            Metric::MarketCap => company.market_cap,
            Metric::PeRatio => company.pe_ratio,
            Metric::DebtToEquity => company.debt_to_equity,
            Metric::Revenue => company.revenue,
            Metric::Profit => company.profit,
            Metric::Roce => company.roce,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| ScreenerError::UnknownMetric(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
            Comparison::Equal => "=",
            Comparison::GreaterOrEqual => ">=",
            Comparison::LessOrEqual => "<=",
        }
    }

    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Greater => lhs > rhs,
            Comparison::Less => lhs < rhs,
            Comparison::Equal => (lhs - rhs).abs() < 1e-9,
            Comparison::GreaterOrEqual => lhs >= rhs,
            Comparison::LessOrEqual => lhs <= rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricFilter {
    pub metric: Metric,
    pub comparison: Comparison,
    pub value: f64,
}

impl MetricFilter {
    pub fn matches(&self, company: &Company) -> bool {
        self.comparison.holds(self.metric.value(company), self.value)
    }
}

impl fmt::Display for MetricFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.metric, self.comparison.symbol(), self.value)
    }
}

impl FromStr for MetricFilter {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = s
            .find(['<', '>', '='])
            .ok_or_else(|| ScreenerError::MissingOperator(s.to_string()))?;
        let (lhs, rest) = s.split_at(pos);

        // two-character operators first
        let (comparison, rhs) = if let Some(rhs) = rest.strip_prefix(">=") {
            (Comparison::GreaterOrEqual, rhs)
        } else if let Some(rhs) = rest.strip_prefix("<=") {
            (Comparison::LessOrEqual, rhs)
        } else if let Some(rhs) = rest.strip_prefix('>') {
            (Comparison::Greater, rhs)
        } else if let Some(rhs) = rest.strip_prefix('<') {
            (Comparison::Less, rhs)
        } else {
            (Comparison::Equal, &rest[1..])
        };

        let metric: Metric = lhs.parse()?;
        let value = rhs
            .trim()
            .parse::<f64>()
            .map_err(|_| ScreenerError::InvalidValue {
                filter: s.to_string(),
                value: rhs.trim().to_string(),
            })?;

        Ok(MetricFilter {
            metric,
            comparison,
            value,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub metric: Metric,
    pub descending: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder {
            metric: Metric::MarketCap,
            descending: true,
        }
    }
}

/// Companies matching `sector` (if any) and every filter, sorted by `sort`.
pub fn screen<'a>(
    registry: &'a CompanyRegistry,
    sector: Option<Sector>,
    filters: &[MetricFilter],
    sort: SortOrder,
) -> Vec<&'a Company> {
    let mut matches: Vec<&Company> = registry
        .iter()
        .filter(|c| sector.is_none_or(|s| c.sector == s))
        .filter(|c| filters.iter().all(|f| f.matches(c)))
        .collect();

    matches.sort_by(|a, b| {
        let ord = sort
            .metric
            .value(a)
            .partial_cmp(&sort.metric.value(b))
            .unwrap_or(Ordering::Equal);
        if sort.descending { ord.reverse() } else { ord }
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, sector: Sector, price: f64, pe: f64, cap: f64) -> Company {
        let mut c = Company::new(name, sector, price);
        c.pe_ratio = pe;
        c.market_cap = cap;
        c
    }

    fn registry() -> CompanyRegistry {
        CompanyRegistry::new(vec![
            company("TechNova", Sector::Technology, 100.0, 25.0, 5.0e11),
            company("ByteWorks", Sector::Technology, 80.0, 15.0, 2.0e11),
            company("FinEdge", Sector::Finance, 50.0, 10.0, 3.0e11),
            company("GreenCore", Sector::Energy, 20.0, 30.0, 1.0e11),
        ])
        .unwrap()
    }

    fn names<'a>(companies: &[&'a Company]) -> Vec<&'a str> {
        companies.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn parse_each_operator() {
        let f: MetricFilter = "pe_ratio<20".parse().unwrap();
        assert_eq!(f.metric, Metric::PeRatio);
        assert_eq!(f.comparison, Comparison::Less);
        assert_eq!(f.value, 20.0);

        let f: MetricFilter = "price >= 50".parse().unwrap();
        assert_eq!(f.comparison, Comparison::GreaterOrEqual);
        let f: MetricFilter = "roe<=0.2".parse().unwrap();
        assert_eq!(f.comparison, Comparison::LessOrEqual);
        let f: MetricFilter = "market_cap>1e11".parse().unwrap();
        assert_eq!(f.comparison, Comparison::Greater);
        assert_eq!(f.value, 1e11);
        let f: MetricFilter = "PRICE=80".parse().unwrap();
        assert_eq!(f.metric, Metric::Price);
        assert_eq!(f.comparison, Comparison::Equal);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "pe_ratio".parse::<MetricFilter>().unwrap_err(),
            ScreenerError::MissingOperator("pe_ratio".into())
        );
        assert_eq!(
            "beta>1".parse::<MetricFilter>().unwrap_err(),
            ScreenerError::UnknownMetric("beta".into())
        );
        assert!(matches!(
            "price>abc".parse::<MetricFilter>().unwrap_err(),
            ScreenerError::InvalidValue { .. }
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let f: MetricFilter = "debt_to_equity <= 1.5".parse().unwrap();
        assert_eq!(f.to_string(), "debt_to_equity<=1.5");
        assert_eq!(f.to_string().parse::<MetricFilter>().unwrap(), f);
    }

    #[test]
    fn default_sort_is_market_cap_descending() {
        let reg = registry();
        let result = screen(&reg, None, &[], SortOrder::default());
        assert_eq!(
            names(&result),
            vec!["TechNova", "FinEdge", "ByteWorks", "GreenCore"]
        );
    }

    #[test]
    fn sector_and_filters_combine() {
        let reg = registry();
        let filters = vec!["pe_ratio<20".parse().unwrap()];
        let result = screen(&reg, Some(Sector::Technology), &filters, SortOrder::default());
        assert_eq!(names(&result), vec!["ByteWorks"]);

        let result = screen(&reg, None, &filters, SortOrder::default());
        assert_eq!(names(&result), vec!["FinEdge", "ByteWorks"]);
    }

    #[test]
    fn ascending_sort_by_price() {
        let reg = registry();
        let sort = SortOrder {
            metric: Metric::Price,
            descending: false,
        };
        let result = screen(&reg, None, &[], sort);
        assert_eq!(
            names(&result),
            vec!["GreenCore", "FinEdge", "ByteWorks", "TechNova"]
        );
    }

    #[test]
    fn no_matches() {
        let reg = registry();
        let filters = vec!["price>1000".parse().unwrap()];
        assert!(screen(&reg, None, &filters, SortOrder::default()).is_empty());
    }
}
