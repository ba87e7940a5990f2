//! Return statistics over the weekly value history.

use super::portfolio::WeeklyRecord;

const WEEKS_PER_YEAR: f64 = 52.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnMetrics {
    pub total_return: f64,
    pub annualized_return: f64,
    pub max_drawdown: f64,
    pub max_drawdown_weeks: u32,
    pub best_week: f64,
    pub worst_week: f64,
    /// Standard deviation of weekly returns, annualized.
    pub volatility: f64,
}

impl ReturnMetrics {
    /// Metrics for `history`, which must start with the opening record.
    pub fn compute(history: &[WeeklyRecord]) -> Self {
        let (first, last) = match (history.first(), history.last()) {
            (Some(first), Some(last)) => (first.value, last.value),
            _ => return Self::empty(),
        };

        let total_return = if first > 0.0 {
            (last - first) / first
        } else {
            0.0
        };

        let weeks = history.len().saturating_sub(1) as f64;
        let years = weeks / WEEKS_PER_YEAR;
        let annualized_return = if years > 0.0 && total_return > -1.0 {
            (1.0 + total_return).powf(1.0 / years) - 1.0
        } else {
            0.0
        };

        let (max_drawdown, max_drawdown_weeks) = compute_drawdown(history);
        let returns = weekly_returns(history);

        let best_week = returns.iter().copied().reduce(f64::max).unwrap_or(0.0);
        let worst_week = returns.iter().copied().reduce(f64::min).unwrap_or(0.0);

        let volatility = if returns.is_empty() {
            0.0
        } else {
            let n = returns.len() as f64;
            let mean = returns.iter().sum::<f64>() / n;
            let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
            variance.sqrt() * WEEKS_PER_YEAR.sqrt()
        };

        ReturnMetrics {
            total_return,
            annualized_return,
            max_drawdown,
            max_drawdown_weeks,
            best_week,
            worst_week,
            volatility,
        }
    }

    fn empty() -> Self {
        ReturnMetrics {
            total_return: 0.0,
            annualized_return: 0.0,
            max_drawdown: 0.0,
            max_drawdown_weeks: 0,
            best_week: 0.0,
            worst_week: 0.0,
            volatility: 0.0,
        }
    }
}

fn weekly_returns(history: &[WeeklyRecord]) -> Vec<f64> {
    history
        .windows(2)
        .map(|w| {
            let prev = w[0].value;
            if prev > 0.0 {
                (w[1].value - prev) / prev
            } else {
                0.0
            }
        })
        .collect()
}

fn compute_drawdown(history: &[WeeklyRecord]) -> (f64, u32) {
    let Some(first) = history.first() else {
        return (0.0, 0);
    };

    let mut peak = first.value;
    let mut max_dd = 0.0_f64;
    let mut max_dd_weeks = 0u32;
    let mut current_dd_weeks = 0u32;

    for record in history {
        if record.value >= peak {
            peak = record.value;
            current_dd_weeks = 0;
        } else if peak > 0.0 {
            let dd = (peak - record.value) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
            current_dd_weeks += 1;
            if current_dd_weeks > max_dd_weeks {
                max_dd_weeks = current_dd_weeks;
            }
        }
    }

    (max_dd, max_dd_weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn history(values: &[f64]) -> Vec<WeeklyRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| WeeklyRecord {
                week: i as u32,
                value,
            })
            .collect()
    }

    #[test]
    fn empty_history() {
        let m = ReturnMetrics::compute(&[]);
        assert_eq!(m.total_return, 0.0);
        assert_eq!(m.max_drawdown_weeks, 0);
    }

    #[test]
    fn single_record_has_no_returns() {
        let m = ReturnMetrics::compute(&history(&[10_000.0]));
        assert_eq!(m.total_return, 0.0);
        assert_eq!(m.annualized_return, 0.0);
        assert_eq!(m.volatility, 0.0);
    }

    #[test]
    fn total_return() {
        let m = ReturnMetrics::compute(&history(&[10_000.0, 10_500.0, 11_000.0]));
        assert_relative_eq!(m.total_return, 0.1, epsilon = 1e-12);
        assert_relative_eq!(m.best_week, 0.05, epsilon = 1e-12);
        assert_relative_eq!(m.worst_week, 500.0 / 10_500.0, epsilon = 1e-12);
    }

    #[test]
    fn annualized_over_full_year_equals_total() {
        let mut values = vec![10_000.0; 52];
        values.push(12_000.0);
        let m = ReturnMetrics::compute(&history(&values));
        assert_relative_eq!(m.annualized_return, m.total_return, epsilon = 1e-9);
    }

    #[test]
    fn drawdown_depth_and_length() {
        let m = ReturnMetrics::compute(&history(&[100.0, 120.0, 90.0, 96.0, 130.0, 117.0]));
        assert_relative_eq!(m.max_drawdown, 0.25, epsilon = 1e-12);
        assert_eq!(m.max_drawdown_weeks, 2);
        assert_relative_eq!(m.worst_week, -0.25, epsilon = 1e-12);
    }

    #[test]
    fn flat_history_has_no_volatility() {
        let m = ReturnMetrics::compute(&history(&[100.0, 100.0, 100.0]));
        assert_eq!(m.volatility, 0.0);
        assert_eq!(m.max_drawdown, 0.0);
    }

    #[test]
    fn total_wipeout_does_not_annualize() {
        let m = ReturnMetrics::compute(&history(&[100.0, 0.0]));
        assert_relative_eq!(m.total_return, -1.0);
        assert_eq!(m.annualized_return, 0.0);
    }
}
