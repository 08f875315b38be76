//! Arithmetic primitives shared by every statistic

/// Exponent used by pro-football Pythagorean expectation
pub const DEFAULT_PYTHAGOREAN_EXPONENT: f64 = 2.37;

/// Injected arithmetic for derived statistics.
///
/// Every operation returns `None` instead of dividing by zero, so a record
/// with no games simply has no percentage.
pub trait Calculator: Send + Sync {
    fn divide(&self, numerator: f64, denominator: f64) -> Option<f64> {
        if denominator == 0.0 {
            None
        } else {
            Some(numerator / denominator)
        }
    }

    /// Ties count as half a win and half a loss.
    fn winning_percentage(&self, wins: u32, losses: u32, ties: u32) -> Option<f64> {
        let games = f64::from(wins) + f64::from(losses) + f64::from(ties);
        self.divide(
            2.0 * f64::from(wins) + f64::from(ties),
            2.0 * games,
        )
    }

    /// `PF^e / (PF^e + PA^e)`
    fn pythagorean_winning_percentage(&self, points_for: f64, points_against: f64) -> Option<f64>;
}

/// Calculator with a configurable Pythagorean exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultCalculator {
    pub exponent: f64,
}

impl DefaultCalculator {
    pub fn new(exponent: f64) -> Self {
        Self { exponent }
    }
}

impl Default for DefaultCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHAGOREAN_EXPONENT)
    }
}

impl Calculator for DefaultCalculator {
    fn pythagorean_winning_percentage(&self, points_for: f64, points_against: f64) -> Option<f64> {
        let a = points_for.max(0.0).powf(self.exponent);
        let b = points_against.max(0.0).powf(self.exponent);
        self.divide(a, a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_divide_by_zero_is_none() {
        let calc = DefaultCalculator::default();
        assert_eq!(calc.divide(10.0, 0.0), None);
        assert_eq!(calc.divide(10.0, 4.0), Some(2.5));
    }

    #[test]
    fn test_winning_percentage() {
        let calc = DefaultCalculator::default();
        assert_eq!(calc.winning_percentage(12, 4, 0), Some(0.75));
        // 10-5-1: (20 + 1) / 32
        let pct = calc.winning_percentage(10, 5, 1).unwrap();
        assert!((pct - 21.0 / 32.0).abs() < EPSILON);
    }

    #[test]
    fn test_winning_percentage_no_games() {
        let calc = DefaultCalculator::default();
        assert_eq!(calc.winning_percentage(0, 0, 0), None);
    }

    #[test]
    fn test_pythagorean_even_points_is_half() {
        let calc = DefaultCalculator::default();
        let pct = calc.pythagorean_winning_percentage(300.0, 300.0).unwrap();
        assert!((pct - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_pythagorean_with_exponent_two() {
        let calc = DefaultCalculator::new(2.0);
        // 400^2 / (400^2 + 300^2) = 160000 / 250000
        let pct = calc.pythagorean_winning_percentage(400.0, 300.0).unwrap();
        assert!((pct - 0.64).abs() < EPSILON);
    }

    #[test]
    fn test_pythagorean_default_exponent() {
        let calc = DefaultCalculator::default();
        let expected = 400f64.powf(2.37) / (400f64.powf(2.37) + 300f64.powf(2.37));
        let pct = calc.pythagorean_winning_percentage(400.0, 300.0).unwrap();
        assert!((pct - expected).abs() < EPSILON);
    }

    #[test]
    fn test_pythagorean_shutout_sides() {
        let calc = DefaultCalculator::default();
        assert_eq!(calc.pythagorean_winning_percentage(0.0, 0.0), None);
        assert_eq!(calc.pythagorean_winning_percentage(10.0, 0.0), Some(1.0));
        assert_eq!(calc.pythagorean_winning_percentage(0.0, 10.0), Some(0.0));
    }
}
