//! Configuration validation.
//!
//! Every key is optional. A key that is present must parse and fall in range;
//! the first violation is reported.

use std::str::FromStr;

use crate::domain::error::SimvestorError;
use crate::ports::config_port::ConfigPort;

pub fn validate_engine_config(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    validate_base_volatility(config)?;
    validate_price_floor(config)?;
    Ok(())
}

pub fn validate_game_config(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    validate_initial_cash(config)?;
    validate_weeks(config)?;
    validate_weeks_per_quarter(config)?;
    validate_seed(config)?;
    Ok(())
}

pub fn validate_paths(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    validate_non_blank(config, "news", "catalog_path")?;
    validate_non_blank(config, "report", "output_path")?;
    Ok(())
}

/// All sections, in file order.
pub fn validate_config(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    validate_engine_config(config)?;
    validate_game_config(config)?;
    validate_paths(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> SimvestorError {
    SimvestorError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// The parsed value of `[section] key`, or `None` when the key is absent.
fn parse_present<T: FromStr>(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<T>, SimvestorError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| invalid(section, key, format!("cannot parse '{}'", raw.trim()))),
    }
}

fn validate_base_volatility(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    if let Some(value) = parse_present::<f64>(config, "engine", "base_volatility")? {
        if !(value > 0.0 && value < 1.0) {
            return Err(invalid(
                "engine",
                "base_volatility",
                "base_volatility must be between 0 and 1",
            ));
        }
    }
    Ok(())
}

fn validate_price_floor(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    if let Some(value) = parse_present::<f64>(config, "engine", "price_floor")? {
        if value <= 0.0 || !value.is_finite() {
            return Err(invalid("engine", "price_floor", "price_floor must be positive"));
        }
    }
    Ok(())
}

fn validate_initial_cash(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    if let Some(value) = parse_present::<f64>(config, "game", "initial_cash")? {
        if value <= 0.0 || !value.is_finite() {
            return Err(invalid("game", "initial_cash", "initial_cash must be positive"));
        }
    }
    Ok(())
}

fn validate_weeks(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    if let Some(value) = parse_present::<i64>(config, "game", "weeks")? {
        if value < 1 || value > u32::MAX as i64 {
            return Err(invalid("game", "weeks", "weeks must be at least 1"));
        }
    }
    Ok(())
}

fn validate_weeks_per_quarter(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    if let Some(value) = parse_present::<i64>(config, "game", "weeks_per_quarter")? {
        if value < 1 || value > u32::MAX as i64 {
            return Err(invalid(
                "game",
                "weeks_per_quarter",
                "weeks_per_quarter must be at least 1",
            ));
        }
    }
    Ok(())
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), SimvestorError> {
    parse_present::<u64>(config, "game", "seed")?;
    Ok(())
}

fn validate_non_blank(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), SimvestorError> {
    match config.get_string(section, key) {
        Some(s) if s.trim().is_empty() => {
            Err(invalid(section, key, format!("{} must not be empty", key)))
        }
        _ => Ok(()),
    }
}
