//! Game session: owns the market state and advances it one week at a time.

use tracing::info;

use super::company::CompanyRegistry;
use super::error::SimvestorError;
use super::news::NewsCatalog;
use super::portfolio::Portfolio;
use super::price_engine::{EngineConfig, PriceEngine};
use super::quarterly::QuarterlyReport;
use crate::ports::random_port::RandomPort;

pub const DEFAULT_INITIAL_CASH: f64 = 10_000.0;
pub const DEFAULT_WEEKS: u32 = 12;
pub const DEFAULT_WEEKS_PER_QUARTER: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub initial_cash: f64,
    pub engine: EngineConfig,
    pub weeks_per_quarter: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_cash: DEFAULT_INITIAL_CASH,
            engine: EngineConfig::default(),
            weeks_per_quarter: DEFAULT_WEEKS_PER_QUARTER,
        }
    }
}

/// What happened during one call to [`GameSession::advance_week`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeekOutcome {
    pub week: u32,
    pub headline: String,
    pub total_value: f64,
    /// Market sentiment after the tick.
    pub sentiment: f64,
    /// Closing price of every company, in registry order.
    pub prices: Vec<(String, f64)>,
    pub quarterly_report: Option<QuarterlyReport>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    registry: CompanyRegistry,
    engine: PriceEngine,
    catalog: NewsCatalog,
    portfolio: Portfolio,
    week: u32,
    news_history: Vec<String>,
    quarter_start_value: f64,
    quarterly_reports: Vec<QuarterlyReport>,
}

impl GameSession {
    pub fn new(config: SessionConfig, registry: CompanyRegistry, catalog: NewsCatalog) -> Self {
        let engine = PriceEngine::new(config.engine, &registry);
        Self {
            config,
            registry,
            engine,
            catalog,
            portfolio: Portfolio::new(config.initial_cash),
            week: 1,
            news_history: Vec::new(),
            quarter_start_value: config.initial_cash,
            quarterly_reports: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn registry(&self) -> &CompanyRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &PriceEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &NewsCatalog {
        &self.catalog
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// The week the next call to `advance_week` will simulate.
    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn news_history(&self) -> &[String] {
        &self.news_history
    }

    /// The last `n` headlines, newest first.
    pub fn recent_news(&self, n: usize) -> Vec<&str> {
        self.news_history
            .iter()
            .rev()
            .take(n)
            .map(String::as_str)
            .collect()
    }

    pub fn quarterly_reports(&self) -> &[QuarterlyReport] {
        &self.quarterly_reports
    }

    pub fn total_value(&self) -> f64 {
        self.portfolio.total_value(&self.registry)
    }

    pub fn buy(&mut self, name: &str, shares: u64) -> Result<(), SimvestorError> {
        self.portfolio.buy(&self.registry, name, shares)?;
        info!(company = name, shares, cash = self.portfolio.cash, "bought shares");
        Ok(())
    }

    pub fn sell(&mut self, name: &str, shares: u64) -> Result<(), SimvestorError> {
        self.portfolio.sell(&self.registry, name, shares)?;
        info!(company = name, shares, cash = self.portfolio.cash, "sold shares");
        Ok(())
    }

    /// Simulate one week: pick a headline, tick the market with it, and
    /// record the portfolio value. Produces a quarterly report on quarter
    /// boundaries.
    pub fn advance_week(&mut self, rng: &mut dyn RandomPort) -> WeekOutcome {
        let item = self.catalog.select(rng);
        self.engine
            .apply_news_impact(&mut self.registry, &item.effects, item.sentiment, rng);
        let headline = item.headline.clone();
        self.news_history.push(headline.clone());

        let week = self.week;
        let total_value = self.portfolio.total_value(&self.registry);
        self.portfolio.record_week(week, total_value);
        self.week += 1;

        info!(week, headline = %headline, total_value, "week advanced");

        let quarterly_report = if week % self.config.weeks_per_quarter.max(1) == 0 {
            let report = QuarterlyReport::compute(
                week,
                self.quarter_start_value,
                total_value,
                &self.portfolio,
                &self.registry,
            );
            info!(
                week,
                gain_pct = report.percentage_gain,
                badges = report.badges.len(),
                "quarterly report"
            );
            self.quarter_start_value = total_value;
            self.quarterly_reports.push(report.clone());
            Some(report)
        } else {
            None
        };

        WeekOutcome {
            week,
            headline,
            total_value,
            sentiment: self.engine.market_sentiment(),
            prices: self
                .registry
                .iter()
                .map(|c| (c.name.clone(), c.price))
                .collect(),
            quarterly_report,
        }
    }

    /// Advance `weeks` times, collecting each outcome.
    pub fn run(&mut self, weeks: u32, rng: &mut dyn RandomPort) -> Vec<WeekOutcome> {
        (0..weeks).map(|_| self.advance_week(rng)).collect()
    }
}
