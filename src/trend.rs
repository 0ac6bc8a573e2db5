//! Trailing moving average used for the trend line drawn over the monthly
//! expense series.
//!
//! For index `i` the output is `None` while `i < window - 1`, and otherwise
//! the mean of `amounts[i + 1 - window ..= i]`. Output is always index-aligned
//! with the input so the two series can share an x axis.

use crate::models::{MonthlyPoint, TrendPoint};
use thiserror::Error;

pub const DEFAULT_WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendError {
    #[error("invalid argument: window must be at least 1, got {window}")]
    InvalidArgument { window: usize },
}

/// Moving-average smoother with a fixed trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendSmoother {
    window: usize,
}

impl TrendSmoother {
    pub fn new(window: usize) -> Result<Self, TrendError> {
        if window == 0 {
            return Err(TrendError::InvalidArgument { window });
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn smooth(&self, points: &[MonthlyPoint]) -> Vec<Option<f64>> {
        let amounts: Vec<f64> = points.iter().map(|point| point.amount).collect();
        self.smooth_amounts(&amounts)
    }

    pub fn smooth_amounts(&self, amounts: &[f64]) -> Vec<Option<f64>> {
        let window = self.window;
        let mut smoothed = Vec::with_capacity(amounts.len());
        for i in 0..amounts.len() {
            if i + 1 < window {
                smoothed.push(None);
                continue;
            }
            let sum: f64 = amounts[i + 1 - window..=i].iter().sum();
            smoothed.push(Some(sum / window as f64));
        }
        smoothed
    }

    /// Pairs each month label with its smoothed value.
    pub fn series(&self, points: &[MonthlyPoint]) -> Vec<TrendPoint> {
        points
            .iter()
            .zip(self.smooth(points))
            .map(|(point, value)| TrendPoint {
                month: point.month.clone(),
                value,
            })
            .collect()
    }
}

impl Default for TrendSmoother {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

pub fn smooth(points: &[MonthlyPoint], window: usize) -> Result<Vec<Option<f64>>, TrendError> {
    Ok(TrendSmoother::new(window)?.smooth(points))
}

pub fn trend_series(points: &[MonthlyPoint], window: usize) -> Result<Vec<TrendPoint>, TrendError> {
    Ok(TrendSmoother::new(window)?.series(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(amounts: &[f64]) -> Vec<MonthlyPoint> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| MonthlyPoint::new(format!("M{i}"), *amount))
            .collect()
    }

    #[test]
    fn three_month_average_starts_at_third_point() {
        let input = points(&[10.0, 20.0, 30.0, 40.0]);
        let out = smooth(&input, 3).unwrap();
        assert_eq!(out, vec![None, None, Some(20.0), Some(30.0)]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(smooth(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn zero_window_is_rejected() {
        let input = points(&[1.0]);
        assert_eq!(
            smooth(&input, 0),
            Err(TrendError::InvalidArgument { window: 0 })
        );
        assert!(TrendSmoother::new(0).is_err());
    }

    #[test]
    fn window_longer_than_input_is_all_none() {
        for window in 1..6 {
            let input = points(&vec![5.0; window - 1]);
            let out = smooth(&input, window).unwrap();
            assert_eq!(out.len(), input.len());
            assert!(out.iter().all(Option::is_none));
        }
    }

    #[test]
    fn window_of_one_returns_amounts() {
        let amounts = [12.5, 0.0, 7.25, 1000.0];
        let out = smooth(&points(&amounts), 1).unwrap();
        let expected: Vec<Option<f64>> = amounts.iter().copied().map(Some).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn output_length_matches_input() {
        let input = points(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        for window in 1..=10 {
            assert_eq!(smooth(&input, window).unwrap().len(), input.len());
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let input = points(&[100.0, 250.0, 75.0, 310.0, 0.0]);
        let smoother = TrendSmoother::default();
        assert_eq!(smoother.smooth(&input), smoother.smooth(&input));
    }

    #[test]
    fn negative_amounts_pass_through() {
        let out = smooth(&points(&[-3.0, 0.0, 3.0]), 3).unwrap();
        assert_eq!(out, vec![None, None, Some(0.0)]);
    }

    #[test]
    fn non_finite_amounts_pass_through() {
        let out = smooth(&points(&[1.0, f64::NAN, 3.0, 4.0, 5.0]), 3).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out[..2], [None, None]);
        assert!(out[2].is_some_and(f64::is_nan));
        assert!(out[3].is_some_and(f64::is_nan));
        assert_eq!(out[4], Some(4.0));

        let out = smooth(&points(&[1.0, f64::INFINITY, 2.0, 3.0]), 2).unwrap();
        assert_eq!(out, vec![None, Some(f64::INFINITY), Some(f64::INFINITY), Some(2.5)]);
    }

    #[test]
    fn series_keeps_month_labels_in_order() {
        let input = vec![
            MonthlyPoint::new("Jan 2026", 30.0),
            MonthlyPoint::new("Feb 2026", 60.0),
        ];
        let series = trend_series(&input, 2).unwrap();
        assert_eq!(series[0].month, "Jan 2026");
        assert_eq!(series[0].value, None);
        assert_eq!(series[1].month, "Feb 2026");
        assert_eq!(series[1].value, Some(45.0));
    }

    #[test]
    fn default_window_is_three() {
        assert_eq!(TrendSmoother::default().window(), DEFAULT_WINDOW);
        assert_eq!(DEFAULT_WINDOW, 3);
    }
}
