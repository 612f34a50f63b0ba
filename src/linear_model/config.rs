use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

fn default_learning_rate() -> f64 {
    0.1
}

fn default_iterations() -> usize {
    1000
}

fn default_decision_boundary() -> f64 {
    0.5
}

/// Hyperparameters for [`GradientDescent`](super::GradientDescent).
///
/// Only `batch_size` has no default. Deserializing a config that omits the
/// other fields fills in a learning rate of 0.1, 1000 epochs and a decision
/// boundary of 0.5.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    pub batch_size: usize,
    /// Probability above which a sigmoid output counts as class 1.
    #[serde(default = "default_decision_boundary")]
    pub decision_boundary: f64,
}

impl TrainerConfig {
    pub fn new(batch_size: usize) -> Self {
        Self {
            learning_rate: default_learning_rate(),
            iterations: default_iterations(),
            batch_size,
            decision_boundary: default_decision_boundary(),
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_decision_boundary(mut self, decision_boundary: f64) -> Self {
        self.decision_boundary = decision_boundary;
        self
    }

    /// Checks ranges that do not depend on the training set.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if !(self.decision_boundary > 0.0 && self.decision_boundary < 1.0) {
            return Err(ModelError::InvalidConfig(format!(
                "decision boundary must lie in (0, 1), got {}",
                self.decision_boundary
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::new(10);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.decision_boundary, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TrainerConfig::new(4)
            .with_learning_rate(0.5)
            .with_iterations(20)
            .with_decision_boundary(0.7);

        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.iterations, 20);
        assert_eq!(config.decision_boundary, 0.7);
    }

    #[test]
    fn test_invalid_learning_rate() {
        assert!(TrainerConfig::new(1).with_learning_rate(0.0).validate().is_err());
        assert!(TrainerConfig::new(1).with_learning_rate(-0.1).validate().is_err());
        assert!(TrainerConfig::new(1).with_learning_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_invalid_decision_boundary() {
        assert!(TrainerConfig::new(1).with_decision_boundary(0.0).validate().is_err());
        assert!(TrainerConfig::new(1).with_decision_boundary(1.5).validate().is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: TrainerConfig = serde_json::from_str(r#"{"batch_size": 10}"#).unwrap();
        assert_eq!(config, TrainerConfig::new(10));

        let config: TrainerConfig =
            serde_json::from_str(r#"{"batch_size": 100, "learning_rate": 1.0, "iterations": 40}"#)
                .unwrap();
        assert_eq!(config.learning_rate, 1.0);
        assert_eq!(config.iterations, 40);
    }

    #[test]
    fn test_deserialize_requires_batch_size() {
        let result: std::result::Result<TrainerConfig, _> =
            serde_json::from_str(r#"{"learning_rate": 0.1}"#);
        assert!(result.is_err());
    }
}
