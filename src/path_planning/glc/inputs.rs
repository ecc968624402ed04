//! Finite control input sets

use crate::common::{check_dimension, GlcError, GlcResult, Inputs, StateVector};

/// Ordered, append-only collection of control samples of a fixed dimension
#[derive(Debug, Clone, Default)]
pub struct ControlInputSet {
    control_dim: usize,
    samples: Vec<StateVector>,
}

impl ControlInputSet {
    pub fn new(control_dim: usize) -> Self {
        Self {
            control_dim,
            samples: Vec::new(),
        }
    }

    /// Build a set from already enumerated samples
    pub fn from_samples(control_dim: usize, samples: Vec<StateVector>) -> GlcResult<Self> {
        let mut set = Self::new(control_dim);
        for u in samples {
            set.add_input_sample(u)?;
        }
        Ok(set)
    }

    /// Append a sample, rejecting wrong dimensions and non-finite values
    pub fn add_input_sample(&mut self, u: StateVector) -> GlcResult<()> {
        check_dimension("control sample", self.control_dim, &u)?;
        if !crate::common::is_finite(&u) {
            return Err(GlcError::InvalidParameter(format!(
                "control sample {} is not finite",
                self.samples.len()
            )));
        }
        self.samples.push(u);
        Ok(())
    }

    pub fn control_dim(&self) -> usize {
        self.control_dim
    }
}

impl Inputs for ControlInputSet {
    fn samples(&self) -> &[StateVector] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_samples_in_order() {
        let mut set = ControlInputSet::new(2);
        set.add_input_sample(StateVector::from_vec(vec![1.0, 0.0])).unwrap();
        set.add_input_sample(StateVector::from_vec(vec![1.0, 0.5])).unwrap();
        assert_eq!(set.sample_count(), 2);
        assert_eq!(set.samples()[1][1], 0.5);
    }

    #[test]
    fn test_rejects_wrong_dimension() {
        let mut set = ControlInputSet::new(2);
        assert!(set.add_input_sample(StateVector::from_vec(vec![1.0])).is_err());
        assert!(ControlInputSet::from_samples(1, vec![StateVector::from_vec(vec![1.0, 2.0])]).is_err());
        assert_eq!(set.sample_count(), 0);
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut set = ControlInputSet::new(1);
        assert!(set.add_input_sample(StateVector::from_vec(vec![f64::NAN])).is_err());
    }
}
