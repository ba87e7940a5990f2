#![allow(dead_code)]

use simvestor::domain::company::{Company, CompanyRegistry};
use simvestor::domain::error::SimvestorError;
use simvestor::domain::news::{Effect, NewsCatalog, NewsItem};
use simvestor::domain::sector::Sector;
use simvestor::domain::session::WeekOutcome;
use simvestor::ports::random_port::RandomPort;
use simvestor::ports::report_port::ReportPort;
use std::cell::RefCell;
use std::process::ExitCode;

/// Always returns the same draw. `0.5` zeroes every noise term.
pub struct FixedRandom(pub f64);

impl RandomPort for FixedRandom {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays `draws` in order, cycling when exhausted.
pub struct SequenceRandom {
    draws: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, pos: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomPort for SequenceRandom {
    fn next_uniform(&mut self) -> f64 {
        let draw = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        draw
    }
}

pub fn make_company(name: &str, sector: Sector, price: f64) -> Company {
    Company::new(name, sector, price)
}

pub fn make_registry(companies: &[(&str, Sector, f64)]) -> CompanyRegistry {
    CompanyRegistry::new(
        companies
            .iter()
            .map(|&(name, sector, price)| make_company(name, sector, price))
            .collect(),
    )
    .unwrap()
}

/// Tech A at 100, Finance B at 50.
pub fn two_sector_registry() -> CompanyRegistry {
    make_registry(&[
        ("A", Sector::Technology, 100.0),
        ("B", Sector::Finance, 50.0),
    ])
}

pub fn single_item_catalog(headline: &str, sentiment: f64, effect: Effect) -> NewsCatalog {
    NewsCatalog::new(vec![NewsItem::new(headline, effect.sector(), sentiment).with_effect(effect)])
        .unwrap()
}

pub fn prices(registry: &CompanyRegistry) -> Vec<f64> {
    registry.iter().map(|c| c.price).collect()
}

pub struct MockReportPort {
    pub calls: RefCell<Vec<(Vec<WeekOutcome>, String)>>,
}

impl MockReportPort {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ReportPort for MockReportPort {
    fn write(&self, weeks: &[WeekOutcome], output_path: &str) -> Result<(), SimvestorError> {
        self.calls
            .borrow_mut()
            .push((weeks.to_vec(), output_path.to_string()));
        Ok(())
    }
}

/// `ExitCode` has no `PartialEq`; compare through its debug form.
pub fn assert_exit_code(actual: ExitCode, expected: u8) {
    assert_eq!(
        format!("{:?}", actual),
        format!("{:?}", ExitCode::from(expected))
    );
}
