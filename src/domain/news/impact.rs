//! Impact primitives that news effects are composed from.
//!
//! All primitives mutate the registry in place and never fail. A corporate
//! event naming a company the registry does not hold is skipped.

use tracing::debug;

use crate::domain::company::CompanyRegistry;
use crate::domain::price_engine::PriceEngine;
use crate::domain::sector::Sector;
use crate::ports::random_port::RandomPort;

/// Noise band applied to the primary sector of a related-sector shock.
pub const PRIMARY_SECTOR_VOLATILITY: f64 = 0.02;
/// Noise band applied to each spillover sector.
pub const RELATED_SECTOR_VOLATILITY: f64 = 0.01;

/// Move every company in `sector` by `base_percentage` plus noise drawn from
/// `[-volatility/2, volatility/2)`.
pub fn impact_sector_with_volatility(
    registry: &mut CompanyRegistry,
    sector: Sector,
    base_percentage: f64,
    volatility: f64,
    floor: f64,
    rng: &mut dyn RandomPort,
) {
    let half = volatility / 2.0;
    for company in registry.in_sector_mut(sector) {
        let noise = rng.uniform_between(-half, half);
        company.apply_move(base_percentage + noise, floor);
    }
}

/// Shock `primary_sector`, then spill a smaller (or opposite) move into each
/// of `related_sectors`.
pub fn impact_related_sectors(
    registry: &mut CompanyRegistry,
    primary_sector: Sector,
    primary_impact: f64,
    related_sectors: &[Sector],
    related_impact: f64,
    floor: f64,
    rng: &mut dyn RandomPort,
) {
    impact_sector_with_volatility(
        registry,
        primary_sector,
        primary_impact,
        PRIMARY_SECTOR_VOLATILITY,
        floor,
        rng,
    );
    for &sector in related_sectors {
        impact_sector_with_volatility(
            registry,
            sector,
            related_impact,
            RELATED_SECTOR_VOLATILITY,
            floor,
            rng,
        );
    }
}

/// Same move as a sector shock, applied to every company.
pub fn market_wide_impact(
    registry: &mut CompanyRegistry,
    base_percentage: f64,
    volatility: f64,
    floor: f64,
    rng: &mut dyn RandomPort,
) {
    let half = volatility / 2.0;
    for company in registry.iter_mut() {
        let noise = rng.uniform_between(-half, half);
        company.apply_move(base_percentage + noise, floor);
    }
}

/// Catastrophic event for `target_name`, plus a flat `related_sector_impact`
/// on every other company in its sector.
pub fn apply_corporate_scandal(
    registry: &mut CompanyRegistry,
    target_name: &str,
    severity: f64,
    related_sector_impact: f64,
    engine: &mut PriceEngine,
) {
    let Some(target) = registry.get_mut(target_name) else {
        debug!(company = target_name, "scandal target not in registry, skipping");
        return;
    };
    engine.apply_catastrophic_event(target, severity);
    let sector = target.sector;

    let floor = engine.price_floor();
    for company in registry
        .in_sector_mut(sector)
        .filter(|c| c.name != target_name)
    {
        company.apply_move(related_sector_impact, floor);
    }
}

/// Breakthrough event for `target_name`.
pub fn apply_merger_acquisition(
    registry: &mut CompanyRegistry,
    target_name: &str,
    magnitude: f64,
    engine: &mut PriceEngine,
) {
    match registry.get_mut(target_name) {
        Some(target) => engine.apply_breakthrough_event(target, magnitude),
        None => debug!(company = target_name, "merger target not in registry, skipping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::Company;
    use crate::domain::price_engine::EngineConfig;

    struct Fixed(f64);

    impl RandomPort for Fixed {
        fn next_uniform(&mut self) -> f64 {
            self.0
        }
    }

    fn registry() -> CompanyRegistry {
        CompanyRegistry::new(vec![
            Company::new("TechNova", Sector::Technology, 100.0),
            Company::new("ByteWorks", Sector::Technology, 80.0),
            Company::new("FinEdge", Sector::Finance, 50.0),
            Company::new("GreenCore", Sector::Energy, 20.0),
        ])
        .unwrap()
    }

    fn price(reg: &CompanyRegistry, name: &str) -> f64 {
        reg.get(name).unwrap().price
    }

    #[test]
    fn sector_shock_only_touches_sector() {
        let mut reg = registry();
        impact_sector_with_volatility(&mut reg, Sector::Technology, 0.1, 0.0, 0.01, &mut Fixed(0.3));
        assert!((price(&reg, "TechNova") - 110.0).abs() < 1e-9);
        assert!((price(&reg, "ByteWorks") - 88.0).abs() < 1e-9);
        assert_eq!(price(&reg, "FinEdge"), 50.0);
        assert!(reg.get("FinEdge").unwrap().price_change.is_none());
    }

    #[test]
    fn sector_shock_noise_is_bounded() {
        let mut reg = registry();
        // lowest draw gives base - volatility/2
        impact_sector_with_volatility(&mut reg, Sector::Energy, 0.0, 0.1, 0.01, &mut Fixed(0.0));
        assert!((price(&reg, "GreenCore") - 19.0).abs() < 1e-9);
    }

    #[test]
    fn related_sectors_spill_over() {
        let mut reg = registry();
        impact_related_sectors(
            &mut reg,
            Sector::Technology,
            -0.1,
            &[Sector::Finance, Sector::Energy],
            0.05,
            0.01,
            &mut Fixed(0.5),
        );
        assert!((price(&reg, "TechNova") - 90.0).abs() < 1e-9);
        assert!((price(&reg, "FinEdge") - 52.5).abs() < 1e-9);
        assert!((price(&reg, "GreenCore") - 21.0).abs() < 1e-9);
    }

    #[test]
    fn market_wide_moves_everyone() {
        let mut reg = registry();
        market_wide_impact(&mut reg, -0.5, 0.0, 0.01, &mut Fixed(0.9));
        assert!((price(&reg, "TechNova") - 50.0).abs() < 1e-9);
        assert!((price(&reg, "GreenCore") - 10.0).abs() < 1e-9);
        for company in reg.iter() {
            assert!((company.price_change.unwrap() - (-50.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn market_wide_crash_respects_floor() {
        let mut reg = registry();
        market_wide_impact(&mut reg, -2.0, 0.0, 0.01, &mut Fixed(0.5));
        assert!(reg.iter().all(|c| c.price == 0.01));
    }

    #[test]
    fn scandal_hits_target_and_peers() {
        let mut reg = registry();
        let mut engine = PriceEngine::new(EngineConfig::default(), &reg);
        apply_corporate_scandal(&mut reg, "TechNova", 1.0, -0.1, &mut engine);
        assert!((price(&reg, "TechNova") - 50.0).abs() < 1e-9);
        assert!((price(&reg, "ByteWorks") - 72.0).abs() < 1e-9);
        assert_eq!(price(&reg, "FinEdge"), 50.0);
        assert!((engine.market_sentiment() - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn scandal_missing_target_is_noop() {
        let mut reg = registry();
        let before = reg.clone();
        let mut engine = PriceEngine::new(EngineConfig::default(), &reg);
        apply_corporate_scandal(&mut reg, "TechGiant", 0.9, -0.07, &mut engine);
        assert_eq!(reg, before);
        assert_eq!(engine.market_sentiment(), 0.0);
    }

    #[test]
    fn merger_lifts_target_only() {
        let mut reg = registry();
        let mut engine = PriceEngine::new(EngineConfig::default(), &reg);
        apply_merger_acquisition(&mut reg, "FinEdge", 0.5, &mut engine);
        assert!((price(&reg, "FinEdge") - 66.25).abs() < 1e-9);
        assert_eq!(price(&reg, "TechNova"), 100.0);
        assert!((engine.momentum("FinEdge") - 0.0975).abs() < 1e-12);
    }

    #[test]
    fn merger_missing_target_is_noop() {
        let mut reg = registry();
        let before = reg.clone();
        let mut engine = PriceEngine::new(EngineConfig::default(), &reg);
        apply_merger_acquisition(&mut reg, "MegaBank", 0.5, &mut engine);
        assert_eq!(reg, before);
        assert_eq!(engine.market_sentiment(), 0.0);
    }
}
