use crate::Matrix;
use crate::error::{ModelError, Result};

/// Feature and label matrices whose rows correspond one to one.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Matrix,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Matrix) -> Result<Self> {
        if features.nrows() != labels.nrows() {
            return Err(ModelError::ShapeMismatch {
                what: "label rows",
                expected: features.nrows(),
                actual: labels.nrows(),
            });
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Number of label columns; one per class for one-hot labels.
    pub fn n_outputs(&self) -> usize {
        self.labels.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![[1.0], [2.0], [3.0]];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
        assert_eq!(dataset.n_outputs(), 1);
    }

    #[test]
    fn test_row_mismatch() {
        let features = array![[1.0], [2.0]];
        let labels = array![[1.0], [2.0], [3.0]];

        let err = Dataset::new(features, labels).unwrap_err();
        assert_eq!(
            err,
            ModelError::ShapeMismatch {
                what: "label rows",
                expected: 2,
                actual: 3,
            }
        );
    }
}
