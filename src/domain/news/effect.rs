//! Declarative news effects and their dispatcher.

use serde::{Deserialize, Serialize};

use super::impact;
use crate::domain::company::CompanyRegistry;
use crate::domain::price_engine::PriceEngine;
use crate::domain::sector::Sector;
use crate::ports::random_port::RandomPort;

/// One price shock. A news item is an ordered list of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    SectorShock {
        sector: Sector,
        base_percentage: f64,
        volatility: f64,
    },
    RelatedSectorShock {
        primary_sector: Sector,
        primary_impact: f64,
        related_sectors: Vec<Sector>,
        related_impact: f64,
    },
    MarketWideShock {
        base_percentage: f64,
        volatility: f64,
    },
    CorporateScandal {
        target: String,
        severity: f64,
        related_sector_impact: f64,
    },
    MergerEvent {
        target: String,
        magnitude: f64,
    },
}

impl Effect {
    pub fn apply(
        &self,
        registry: &mut CompanyRegistry,
        engine: &mut PriceEngine,
        rng: &mut dyn RandomPort,
    ) {
        let floor = engine.price_floor();
        match self {
            Effect::SectorShock {
                sector,
                base_percentage,
                volatility,
            } => impact::impact_sector_with_volatility(
                registry,
                *sector,
                *base_percentage,
                *volatility,
                floor,
                rng,
            ),
            Effect::RelatedSectorShock {
                primary_sector,
                primary_impact,
                related_sectors,
                related_impact,
            } => impact::impact_related_sectors(
                registry,
                *primary_sector,
                *primary_impact,
                related_sectors,
                *related_impact,
                floor,
                rng,
            ),
            Effect::MarketWideShock {
                base_percentage,
                volatility,
            } => impact::market_wide_impact(registry, *base_percentage, *volatility, floor, rng),
            Effect::CorporateScandal {
                target,
                severity,
                related_sector_impact,
            } => impact::apply_corporate_scandal(
                registry,
                target,
                *severity,
                *related_sector_impact,
                engine,
            ),
            Effect::MergerEvent { target, magnitude } => {
                impact::apply_merger_acquisition(registry, target, *magnitude, engine)
            }
        }
    }

    /// Company singled out by a corporate effect, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Effect::CorporateScandal { target, .. } | Effect::MergerEvent { target, .. } => {
                Some(target.as_str())
            }
            _ => None,
        }
    }

    /// Sector an effect is scoped to, if any.
    pub fn sector(&self) -> Option<Sector> {
        match self {
            Effect::SectorShock { sector, .. } => Some(*sector),
            Effect::RelatedSectorShock { primary_sector, .. } => Some(*primary_sector),
            _ => None,
        }
    }
}
