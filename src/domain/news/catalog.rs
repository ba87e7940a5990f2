//! The news catalog: headlines paired with the effects they trigger.

use serde::{Deserialize, Serialize};

use super::effect::Effect;
use crate::domain::error::SimvestorError;
use crate::domain::sector::Sector;
use crate::ports::random_port::RandomPort;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    /// Primary sector, for display and filtering only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    /// Sentiment delta applied before the tick's baseline move.
    #[serde(default)]
    pub sentiment: f64,
    pub effects: Vec<Effect>,
}

impl NewsItem {
    pub fn new(headline: impl Into<String>, sector: Option<Sector>, sentiment: f64) -> Self {
        Self {
            headline: headline.into(),
            sector,
            sentiment,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Fixed, ordered list of news items. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NewsItem>", into = "Vec<NewsItem>")]
pub struct NewsCatalog {
    items: Vec<NewsItem>,
}

impl NewsCatalog {
    pub fn new(items: Vec<NewsItem>) -> Result<Self, SimvestorError> {
        if items.is_empty() {
            return Err(SimvestorError::Catalog {
                reason: "catalog must contain at least one news item".into(),
            });
        }
        if let Some(pos) = items.iter().position(|i| i.headline.trim().is_empty()) {
            return Err(SimvestorError::Catalog {
                reason: format!("news item {} has an empty headline", pos),
            });
        }
        Ok(Self { items })
    }

    /// Uniform pick with replacement.
    pub fn select(&self, rng: &mut dyn RandomPort) -> &NewsItem {
        &self.items[rng.pick_index(self.items.len())]
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&NewsItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Companies referenced by corporate effects, in catalog order.
    pub fn referenced_companies(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self
            .items
            .iter()
            .flat_map(|i| i.effects.iter())
            .filter_map(Effect::target)
        {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl TryFrom<Vec<NewsItem>> for NewsCatalog {
    type Error = SimvestorError;

    fn try_from(items: Vec<NewsItem>) -> Result<Self, Self::Error> {
        NewsCatalog::new(items)
    }
}

impl From<NewsCatalog> for Vec<NewsItem> {
    fn from(catalog: NewsCatalog) -> Self {
        catalog.items
    }
}

fn sector_shock(sector: Sector, base_percentage: f64, volatility: f64) -> Effect {
    Effect::SectorShock {
        sector,
        base_percentage,
        volatility,
    }
}

fn spillover(primary: Sector, primary_impact: f64, related: &[Sector], related_impact: f64) -> Effect {
    Effect::RelatedSectorShock {
        primary_sector: primary,
        primary_impact,
        related_sectors: related.to_vec(),
        related_impact,
    }
}

fn market_wide(base_percentage: f64, volatility: f64) -> Effect {
    Effect::MarketWideShock {
        base_percentage,
        volatility,
    }
}

fn scandal(target: &str, severity: f64, related_sector_impact: f64) -> Effect {
    Effect::CorporateScandal {
        target: target.to_string(),
        severity,
        related_sector_impact,
    }
}

fn merger(target: &str, magnitude: f64) -> Effect {
    Effect::MergerEvent {
        target: target.to_string(),
        magnitude,
    }
}

/// The built-in catalog.
///
/// Some corporate items name companies (TechGiant, MegaBank, EnergyCorp) that
/// are absent from the seed registry; those sub-effects are skipped at apply
/// time so the catalog works against any registry.
pub fn default_catalog() -> NewsCatalog {
    use Sector::*;

    let items = vec![
        NewsItem::new("TechNova launches breakthrough AI chip!", Some(Technology), 0.1)
            .with_effect(spillover(Technology, 0.06, &[Finance, Industrial], 0.02)),
        NewsItem::new("GreenCore faces regulatory hurdles.", Some(Energy), -0.05)
            .with_effect(sector_shock(Energy, -0.05, 0.03)),
        NewsItem::new("FinEdge reports record profits.", Some(Finance), 0.05)
            .with_effect(sector_shock(Finance, 0.05, 0.02)),
        NewsItem::new("HealthPlus recalls product line.", Some(Healthcare), -0.05)
            .with_effect(scandal("HealthPlus", 0.2, -0.02)),
        NewsItem::new("Market optimism boosts all stocks.", None, 0.2)
            .with_effect(market_wide(0.05, 0.02)),
        NewsItem::new("Economic downturn hits tech sector.", Some(Technology), -0.15)
            .with_effect(spillover(Technology, -0.12, &[Finance, Consumer], -0.03)),
        NewsItem::new("GreenCore wins sustainability award.", Some(Energy), 0.05)
            .with_effect(sector_shock(Energy, 0.06, 0.02)),
        NewsItem::new("FinEdge faces fraud investigation.", Some(Finance), -0.1)
            .with_effect(scandal("FinEdge", 0.6, -0.04)),
        NewsItem::new("HealthPlus develops new vaccine.", Some(Healthcare), 0.1)
            .with_effect(spillover(Healthcare, 0.1, &[Consumer], 0.02)),
        NewsItem::new("TechGiant accounting scandal rocks Wall Street.", Some(Technology), -0.1)
            .with_effect(scandal("TechGiant", 0.9, -0.07))
            .with_effect(sector_shock(Technology, -0.03, 0.02)),
        NewsItem::new("MegaBank executives indicted for fraud.", Some(Finance), -0.1)
            .with_effect(scandal("MegaBank", 0.8, -0.05))
            .with_effect(sector_shock(Finance, -0.02, 0.02)),
        NewsItem::new("EnergyCorp pipeline disaster spills into markets.", Some(Energy), -0.1)
            .with_effect(scandal("EnergyCorp", 0.7, -0.04))
            .with_effect(spillover(Energy, -0.03, &[Industrial], -0.01)),
        NewsItem::new("CloudPeak to acquire DataFlow in landmark deal.", Some(Technology), 0.05)
            .with_effect(merger("DataFlow", 0.6)),
        NewsItem::new("RetailPro agrees merger with BrandMaster.", Some(Consumer), 0.05)
            .with_effect(merger("BrandMaster", 0.4)),
        NewsItem::new("Central bank raises interest rates.", Some(Finance), -0.05)
            .with_effect(spillover(Finance, 0.03, &[Technology, Consumer, Industrial], -0.03)),
        NewsItem::new("Oil price spike squeezes manufacturers.", Some(Energy), -0.05)
            .with_effect(spillover(Energy, 0.07, &[Industrial, Consumer], -0.04)),
        NewsItem::new("Global recession fears grip markets.", None, -0.3)
            .with_effect(market_wide(-0.06, 0.03)),
        NewsItem::new("IndusTech wins major infrastructure contract.", Some(Industrial), 0.05)
            .with_effect(sector_shock(Industrial, 0.06, 0.02)),
        NewsItem::new("Consumer spending surges during holiday season.", Some(Consumer), 0.1)
            .with_effect(sector_shock(Consumer, 0.05, 0.02)),
        NewsItem::new("BioCore trial failure shakes healthcare.", Some(Healthcare), -0.1)
            .with_effect(scandal("BioCore", 0.5, -0.03)),
    ];

    NewsCatalog { items }
}
