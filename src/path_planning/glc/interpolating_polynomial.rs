//! Piecewise polynomial trajectories
//!
//! Every piece of an [`InterpolatingPolynomial`] spans the same interval length
//! and is stored as vector-valued coefficients of powers of the local time
//! `tau = t - t_i`, where `t_i` is the start of the piece.

use std::fmt;

use crate::common::{linear_space, GlcError, GlcResult, StateVector};

/// Relative slack accepted at the ends of the support before a time is rejected
const TIME_TOLERANCE: f64 = 1e-9;

/// Piecewise polynomial curve over `[initial_time, initial_time + n * interval_length]`
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatingPolynomial {
    /// `coefficients[i][k]` multiplies `tau^k` on interval `i`
    coefficients: Vec<Vec<StateVector>>,
    interval_length: f64,
    initial_time: f64,
    dimension: usize,
}

impl InterpolatingPolynomial {
    /// Build a spline from per-interval coefficient lists.
    ///
    /// All intervals must carry the same number of coefficients and every
    /// coefficient the same dimension.
    pub fn new(
        coefficients: Vec<Vec<StateVector>>,
        interval_length: f64,
        initial_time: f64,
    ) -> GlcResult<Self> {
        if coefficients.is_empty() {
            return Err(GlcError::TrajectoryError(
                "spline needs at least one interval".to_string(),
            ));
        }
        if !(interval_length > 0.0 && interval_length.is_finite()) || !initial_time.is_finite() {
            return Err(GlcError::TrajectoryError(format!(
                "invalid time layout: t0 = {}, interval length = {}",
                initial_time, interval_length
            )));
        }
        let order = coefficients[0].len();
        if order == 0 {
            return Err(GlcError::TrajectoryError(
                "interval without coefficients".to_string(),
            ));
        }
        let dimension = coefficients[0][0].len();
        for (i, interval) in coefficients.iter().enumerate() {
            if interval.len() != order {
                return Err(GlcError::TrajectoryError(format!(
                    "interval {} has {} coefficients, expected {}",
                    i,
                    interval.len(),
                    order
                )));
            }
            if let Some(c) = interval.iter().find(|c| c.len() != dimension) {
                return Err(GlcError::DimensionMismatch {
                    what: format!("coefficient of interval {}", i),
                    expected: dimension,
                    actual: c.len(),
                });
            }
        }
        Ok(Self::from_parts(coefficients, interval_length, initial_time))
    }

    /// Unchecked constructor for callers that build well-formed pieces themselves
    pub(crate) fn from_parts(
        coefficients: Vec<Vec<StateVector>>,
        interval_length: f64,
        initial_time: f64,
    ) -> Self {
        debug_assert!(!coefficients.is_empty() && !coefficients[0].is_empty());
        debug_assert!(interval_length > 0.0);
        let dimension = coefficients[0][0].len();
        Self {
            coefficients,
            interval_length,
            initial_time,
            dimension,
        }
    }

    /// Constant signal held over `n` intervals of length `interval_length`
    pub fn constant(
        value: &StateVector,
        initial_time: f64,
        interval_length: f64,
        n: usize,
    ) -> Self {
        let coefficients = vec![vec![value.clone()]; n.max(1)];
        Self::from_parts(coefficients, interval_length, initial_time)
    }

    /// Append one interval at the end of the support
    pub fn push_interval(&mut self, coefficients: Vec<StateVector>) -> GlcResult<()> {
        if coefficients.len() != self.coefficients[0].len() {
            return Err(GlcError::TrajectoryError(format!(
                "appended interval has {} coefficients, expected {}",
                coefficients.len(),
                self.coefficients[0].len()
            )));
        }
        if let Some(c) = coefficients.iter().find(|c| c.len() != self.dimension) {
            return Err(GlcError::DimensionMismatch {
                what: "appended coefficient".to_string(),
                expected: self.dimension,
                actual: c.len(),
            });
        }
        self.coefficients.push(coefficients);
        Ok(())
    }

    /// Join `segments` end to end into a new spline; the sources are untouched.
    ///
    /// Segments must share dimension and interval length and follow each
    /// other in time. Lower-degree pieces are padded with zero coefficients.
    pub fn concatenate(segments: &[&InterpolatingPolynomial]) -> GlcResult<Self> {
        let first = match segments.first() {
            Some(first) => *first,
            None => {
                return Err(GlcError::TrajectoryError(
                    "nothing to concatenate".to_string(),
                ))
            }
        };
        let h = first.interval_length;
        let order = segments
            .iter()
            .map(|s| s.coefficients[0].len())
            .max()
            .unwrap_or(1);

        let mut coefficients = Vec::new();
        let mut expected_start = first.initial_time;
        for (i, segment) in segments.iter().enumerate() {
            if segment.dimension != first.dimension {
                return Err(GlcError::DimensionMismatch {
                    what: format!("segment {}", i),
                    expected: first.dimension,
                    actual: segment.dimension,
                });
            }
            if (segment.interval_length - h).abs() > TIME_TOLERANCE * h {
                return Err(GlcError::TrajectoryError(format!(
                    "segment {} has interval length {}, expected {}",
                    i, segment.interval_length, h
                )));
            }
            let slack = TIME_TOLERANCE * expected_start.abs().max(1.0);
            if (segment.initial_time - expected_start).abs() > slack {
                return Err(GlcError::TrajectoryError(format!(
                    "segment {} starts at {}, previous segment ends at {}",
                    i, segment.initial_time, expected_start
                )));
            }
            for interval in &segment.coefficients {
                let mut padded = interval.clone();
                padded.resize(order, StateVector::zeros(first.dimension));
                coefficients.push(padded);
            }
            expected_start = segment.final_time();
        }

        Ok(Self::from_parts(coefficients, h, first.initial_time))
    }

    /// State at time `t`.
    ///
    /// Callers keep `t` inside the support; round-off just past either end is
    /// evaluated on the boundary interval. Use [`checked_at`](Self::checked_at)
    /// to reject out-of-range times.
    pub fn at(&self, t: f64) -> StateVector {
        let last = self.coefficients.len() - 1;
        let local = ((t - self.initial_time) / self.interval_length).floor();
        let index = if local <= 0.0 {
            0
        } else {
            (local as usize).min(last)
        };
        let tau = t - (self.initial_time + index as f64 * self.interval_length);

        // Horner
        let interval = &self.coefficients[index];
        let mut value = interval[interval.len() - 1].clone();
        for c in interval.iter().rev().skip(1) {
            value = value * tau + c;
        }
        value
    }

    /// State at time `t`, or `None` if `t` lies outside the support
    pub fn checked_at(&self, t: f64) -> Option<StateVector> {
        if self.contains(t) {
            Some(self.at(t))
        } else {
            None
        }
    }

    /// True if `t` lies within the support (up to round-off)
    pub fn contains(&self, t: f64) -> bool {
        let tf = self.final_time();
        let slack = TIME_TOLERANCE * tf.abs().max(self.initial_time.abs()).max(1.0);
        t >= self.initial_time - slack && t <= tf + slack
    }

    pub fn initial_time(&self) -> f64 {
        self.initial_time
    }

    pub fn final_time(&self) -> f64 {
        self.initial_time + self.duration()
    }

    pub fn duration(&self) -> f64 {
        self.coefficients.len() as f64 * self.interval_length
    }

    pub fn number_of_intervals(&self) -> usize {
        self.coefficients.len()
    }

    pub fn interval_length(&self) -> f64 {
        self.interval_length
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Highest power of `tau` stored per interval
    pub fn degree(&self) -> usize {
        self.coefficients[0].len() - 1
    }

    pub fn initial_state(&self) -> StateVector {
        self.coefficients[0][0].clone()
    }

    pub fn final_state(&self) -> StateVector {
        self.at(self.final_time())
    }

    /// `resolution` evenly spaced check times after the initial instant, ending at the final time
    pub fn interior_sample_times(&self, resolution: usize) -> Vec<f64> {
        let dt = self.duration() / resolution.max(1) as f64;
        (1..=resolution.max(1))
            .map(|i| self.initial_time + dt * i as f64)
            .collect()
    }

    /// `n + 1` evenly spaced `(t, state)` samples covering the whole support
    pub fn sample(&self, n: usize) -> Vec<(f64, StateVector)> {
        linear_space(self.initial_time, self.final_time(), n + 1)
            .into_iter()
            .map(|t| (t, self.at(t)))
            .collect()
    }

    /// Tabulate `n + 1` samples under a heading line
    pub fn describe(&self, n: usize, label: &str) -> String {
        let mut out = format!("{}: {}\n", label, self);
        for (t, x) in self.sample(n) {
            let row: Vec<String> = x.iter().map(|v| format!("{:.4}", v)).collect();
            out.push_str(&format!("  t = {:.4}: [{}]\n", t, row.join(", ")));
        }
        out
    }
}

impl fmt::Display for InterpolatingPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spline over [{:.4}, {:.4}] with {} intervals of length {:.4} (dim {}, degree {})",
            self.initial_time,
            self.final_time(),
            self.number_of_intervals(),
            self.interval_length,
            self.dimension,
            self.degree()
        )
    }
}
