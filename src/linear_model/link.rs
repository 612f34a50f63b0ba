//! Link functions pairing an activation with the loss used to steer the
//! learning rate and the post-processing applied at prediction time.
//!
//! | Link     | Activation           | Loss                      | Prediction          |
//! |----------|----------------------|---------------------------|---------------------|
//! | Identity | `z = Xw`             | mean squared error        | `z`                 |
//! | Sigmoid  | `1 / (1 + e^-z)`     | binary cross-entropy      | `p > boundary`      |
//! | Softmax  | row-wise softmax     | categorical cross-entropy | argmax class index  |

use crate::Matrix;
use crate::error::{ModelError, Result};
use crate::metrics::{argmax_rows, mean_squared_error};
use ndarray::{Axis, Zip};

/// Added inside every logarithm of the cross-entropy losses.
pub const LOG_EPSILON: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkFunction {
    Identity,
    Sigmoid,
    Softmax,
}

impl LinkFunction {
    pub fn name(&self) -> &'static str {
        match self {
            LinkFunction::Identity => "identity",
            LinkFunction::Sigmoid => "sigmoid",
            LinkFunction::Softmax => "softmax",
        }
    }

    /// Maps linear scores to predictions of the same shape.
    pub fn activate(&self, scores: &Matrix) -> Matrix {
        match self {
            LinkFunction::Identity => scores.clone(),
            LinkFunction::Sigmoid => scores.mapv(sigmoid),
            LinkFunction::Softmax => softmax_rows(scores),
        }
    }

    /// Full-dataset error for activated `predictions` against `labels`.
    pub fn loss(&self, labels: &Matrix, predictions: &Matrix) -> f64 {
        match self {
            // Shapes are fixed when the trainer is built; NaN reads as no improvement.
            LinkFunction::Identity => {
                mean_squared_error(labels, predictions).unwrap_or(f64::NAN)
            }
            LinkFunction::Sigmoid | LinkFunction::Softmax => cross_entropy(labels, predictions),
        }
    }

    /// Turns activations into final predictions: values for Identity, 0/1 for
    /// Sigmoid and an `n x 1` column of class indices for Softmax.
    pub fn postprocess(&self, predictions: Matrix, decision_boundary: f64) -> Matrix {
        match self {
            LinkFunction::Identity => predictions,
            LinkFunction::Sigmoid => {
                predictions.mapv(|p| if p > decision_boundary { 1.0 } else { 0.0 })
            }
            LinkFunction::Softmax => argmax_rows(&predictions).insert_axis(Axis(1)),
        }
    }

    /// Rejects labels the link cannot be trained against.
    pub fn validate_labels(&self, labels: &Matrix) -> Result<()> {
        match self {
            LinkFunction::Identity => {
                if labels.iter().any(|y| !y.is_finite()) {
                    return Err(ModelError::InvalidLabels(
                        "regression labels must be finite".to_string(),
                    ));
                }
            }
            LinkFunction::Sigmoid => {
                if labels.iter().any(|&y| y != 0.0 && y != 1.0) {
                    return Err(ModelError::InvalidLabels(
                        "labels must be 0 or 1 for binary classification".to_string(),
                    ));
                }
            }
            LinkFunction::Softmax => {
                for (i, row) in labels.axis_iter(Axis(0)).enumerate() {
                    let binary = row.iter().all(|&y| y == 0.0 || y == 1.0);
                    if !binary || row.sum() != 1.0 {
                        return Err(ModelError::InvalidLabels(format!(
                            "label row {i} is not one-hot"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn softmax_rows(scores: &Matrix) -> Matrix {
    let mut out = scores.clone();
    for mut row in out.axis_iter_mut(Axis(0)) {
        let max = row.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row /= sum;
    }
    out
}

/// `-(1/n) Σ [y ln(p + ε) + (1 - y) ln(1 - p + ε)]` summed over every column.
fn cross_entropy(labels: &Matrix, predictions: &Matrix) -> f64 {
    let n = labels.nrows().max(1) as f64;
    let total = Zip::from(labels)
        .and(predictions)
        .fold(0.0, |acc, &y, &p| {
            acc + y * (p + LOG_EPSILON).ln() + (1.0 - y) * (1.0 - p + LOG_EPSILON).ln()
        });
    -total / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sigmoid_function() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!(sigmoid(1000.0) > 0.99);
        assert!(sigmoid(-1000.0) < 0.01);
        assert!(sigmoid(-1000.0).is_finite());
    }

    #[test]
    fn test_softmax_rows_sum_to_one() {
        let scores = array![[1.0, 2.0, 3.0], [1000.0, 0.0, -1000.0]];
        let probs = LinkFunction::Softmax.activate(&scores);

        for row in probs.axis_iter(Axis(0)) {
            assert!((row.sum() - 1.0).abs() < 1e-12);
            assert!(row.iter().all(|p| p.is_finite()));
        }
        assert!(probs[(0, 2)] > probs[(0, 1)]);
        assert!((probs[(1, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_loss_is_mse() {
        let labels = array![[1.0], [2.0]];
        let predictions = array![[2.0], [4.0]];
        assert!((LinkFunction::Identity.loss(&labels, &predictions) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_identity_loss_on_mismatched_shapes_is_nan() {
        let labels = array![[1.0], [2.0]];
        let predictions = array![[1.0]];
        assert!(LinkFunction::Identity.loss(&labels, &predictions).is_nan());
    }

    #[test]
    fn test_cross_entropy_stays_finite_at_saturation() {
        let labels = array![[1.0], [0.0]];
        let wrong = array![[0.0], [1.0]];
        let right = array![[1.0], [0.0]];

        let worst = LinkFunction::Sigmoid.loss(&labels, &wrong);
        let best = LinkFunction::Sigmoid.loss(&labels, &right);
        assert!(worst.is_finite());
        assert!(best.is_finite());
        assert!(best < worst);
        assert!(best.abs() < 1e-6);
    }

    #[test]
    fn test_binary_cross_entropy_value() {
        let labels = array![[1.0], [0.0]];
        let predictions = array![[0.8], [0.4]];
        let expected = -((0.8f64 + LOG_EPSILON).ln() + (0.6f64 + LOG_EPSILON).ln()) / 2.0;
        assert!((LinkFunction::Sigmoid.loss(&labels, &predictions) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_categorical_cross_entropy_finite() {
        let labels = array![[0.0, 1.0, 0.0]];
        let predictions = array![[0.0, 1.0, 0.0]];
        assert!(LinkFunction::Softmax.loss(&labels, &predictions).is_finite());
    }

    #[test]
    fn test_postprocess() {
        let probs = array![[0.2], [0.5], [0.9]];
        assert_eq!(
            LinkFunction::Sigmoid.postprocess(probs, 0.5),
            array![[0.0], [0.0], [1.0]]
        );

        let probs = array![[0.1, 0.6, 0.3], [0.7, 0.2, 0.1]];
        assert_eq!(
            LinkFunction::Softmax.postprocess(probs, 0.5),
            array![[1.0], [0.0]]
        );

        let values = array![[3.5]];
        assert_eq!(LinkFunction::Identity.postprocess(values.clone(), 0.5), values);
    }

    #[test]
    fn test_validate_labels() {
        assert!(LinkFunction::Sigmoid.validate_labels(&array![[0.0], [1.0]]).is_ok());
        assert!(LinkFunction::Sigmoid.validate_labels(&array![[0.5]]).is_err());

        assert!(
            LinkFunction::Softmax
                .validate_labels(&array![[0.0, 1.0], [1.0, 0.0]])
                .is_ok()
        );
        assert!(LinkFunction::Softmax.validate_labels(&array![[1.0, 1.0]]).is_err());
        assert!(LinkFunction::Softmax.validate_labels(&array![[0.0, 0.0]]).is_err());

        assert!(LinkFunction::Identity.validate_labels(&array![[f64::NAN]]).is_err());
    }
}
