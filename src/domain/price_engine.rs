//! Price engine: random walk with momentum, market sentiment, and the
//! catastrophic/breakthrough shock primitives.
//!
//! Per tick, each company moves by
//!
//! ```text
//! random    = (u - 0.5) * 2 * base_volatility * volatility_multiplier
//! momentum  = last_move * 0.3
//! sentiment = market_sentiment * 0.01
//! move      = random + momentum + sentiment
//! ```
//!
//! and `move` becomes the company's momentum for the next tick. Sentiment is
//! bounded to `[-1, 1]` and widens volatility via `1 + |sentiment|`.

use std::collections::HashMap;

use tracing::debug;

use super::company::{Company, CompanyRegistry};
use super::news::Effect;
use crate::ports::random_port::RandomPort;

pub const DEFAULT_BASE_VOLATILITY: f64 = 0.02;
pub const DEFAULT_PRICE_FLOOR: f64 = 0.01;

const MOMENTUM_CARRY: f64 = 0.3;
const SENTIMENT_DRIFT: f64 = 0.01;

const CATASTROPHE_BASE: f64 = -0.15;
const CATASTROPHE_SPAN: f64 = 0.35;
const CATASTROPHE_MOMENTUM: f64 = 0.5;
const CATASTROPHE_SENTIMENT: f64 = -0.2;

const BREAKTHROUGH_BASE: f64 = 0.15;
const BREAKTHROUGH_SPAN: f64 = 0.35;
const BREAKTHROUGH_MOMENTUM: f64 = 0.3;
const BREAKTHROUGH_SENTIMENT: f64 = 0.1;

/// Percentage change from `old_price` to `new_price`.
///
/// `old_price` must be non-zero; the price floor guarantees this for any
/// price taken from a registry.
pub fn price_change(old_price: f64, new_price: f64) -> f64 {
    ((new_price - old_price) / old_price) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub base_volatility: f64,
    /// Minimum price stored after any mutation.
    pub price_floor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_volatility: DEFAULT_BASE_VOLATILITY,
            price_floor: DEFAULT_PRICE_FLOOR,
        }
    }
}

/// Per-session engine state. Owned by the game session and passed into every
/// tick; never shared between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEngine {
    config: EngineConfig,
    last_movement: HashMap<String, f64>,
    market_sentiment: f64,
    volatility_multiplier: f64,
}

impl PriceEngine {
    /// Engine with zero momentum for every company in `registry`.
    pub fn new(config: EngineConfig, registry: &CompanyRegistry) -> Self {
        let last_movement = registry.iter().map(|c| (c.name.clone(), 0.0)).collect();
        Self {
            config,
            last_movement,
            market_sentiment: 0.0,
            volatility_multiplier: 1.0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn price_floor(&self) -> f64 {
        self.config.price_floor
    }

    pub fn market_sentiment(&self) -> f64 {
        self.market_sentiment
    }

    pub fn volatility_multiplier(&self) -> f64 {
        self.volatility_multiplier
    }

    /// Momentum carried into the next tick; 0 for companies never moved.
    pub fn momentum(&self, name: &str) -> f64 {
        self.last_movement.get(name).copied().unwrap_or(0.0)
    }

    /// Only companies known at construction carry momentum; other names are ignored.
    pub fn set_momentum(&mut self, name: &str, movement: f64) {
        if let Some(m) = self.last_movement.get_mut(name) {
            *m = movement;
        }
    }

    /// Shift sentiment by `delta`, clamped to `[-1, 1]`.
    pub fn adjust_sentiment(&mut self, delta: f64) {
        self.market_sentiment = (self.market_sentiment + delta).clamp(-1.0, 1.0);
        self.volatility_multiplier = 1.0 + self.market_sentiment.abs();
        debug!(
            sentiment = self.market_sentiment,
            volatility_multiplier = self.volatility_multiplier,
            "market sentiment updated"
        );
    }

    /// Baseline random-walk move for every company.
    pub fn update_prices(&mut self, registry: &mut CompanyRegistry, rng: &mut dyn RandomPort) {
        let floor = self.config.price_floor;
        for company in registry.iter_mut() {
            let movement = self.next_movement(&company.name, rng);
            company.apply_move(movement, floor);
        }
    }

    /// One full tick: sentiment update, baseline move, then the news effects.
    ///
    /// The effects always run after the baseline move so the headline is the
    /// last thing to touch prices in a tick.
    pub fn apply_news_impact(
        &mut self,
        registry: &mut CompanyRegistry,
        effects: &[Effect],
        sentiment_delta: f64,
        rng: &mut dyn RandomPort,
    ) {
        self.adjust_sentiment(sentiment_delta);
        self.update_prices(registry, rng);
        for effect in effects {
            effect.apply(registry, self, rng);
        }
    }

    /// Drop `company` by 15% to 50% depending on `severity` in `[0, 1]`.
    pub fn apply_catastrophic_event(&mut self, company: &mut Company, severity: f64) {
        let impact = CATASTROPHE_BASE - severity * CATASTROPHE_SPAN;
        company.apply_move(impact, self.config.price_floor);
        self.set_momentum(&company.name, impact * CATASTROPHE_MOMENTUM);
        debug!(company = %company.name, impact, price = company.price, "catastrophic event");
        self.adjust_sentiment(CATASTROPHE_SENTIMENT);
    }

    /// Lift `company` by 15% to 50% depending on `magnitude` in `[0, 1]`.
    pub fn apply_breakthrough_event(&mut self, company: &mut Company, magnitude: f64) {
        let impact = BREAKTHROUGH_BASE + magnitude * BREAKTHROUGH_SPAN;
        company.apply_move(impact, self.config.price_floor);
        self.set_momentum(&company.name, impact * BREAKTHROUGH_MOMENTUM);
        debug!(company = %company.name, impact, price = company.price, "breakthrough event");
        self.adjust_sentiment(BREAKTHROUGH_SENTIMENT);
    }

    fn next_movement(&mut self, name: &str, rng: &mut dyn RandomPort) -> f64 {
        let momentum = self.momentum(name);
        let random = (rng.next_uniform() - 0.5)
            * 2.0
            * self.config.base_volatility
            * self.volatility_multiplier;
        let movement =
            random + momentum * MOMENTUM_CARRY + self.market_sentiment * SENTIMENT_DRIFT;
        self.set_momentum(name, movement);
        movement
    }
}
