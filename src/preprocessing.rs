use crate::{Matrix, Vector};
use crate::error::{ModelError, Result};
use ndarray::{Axis, s};
use tracing::warn;

/// Z-score standardization with frozen training-set statistics.
///
/// `fit` records the per-column mean and population variance of the first
/// matrix it sees and ignores every later call. `transform` rescales any
/// matrix with those statistics and appends a constant bias column of ones,
/// which itself is never standardized.
///
/// Columns with zero variance are divided by 1 instead, so a constant
/// feature comes out centered rather than as `NaN`.
#[derive(Clone, Debug, Default)]
pub struct Standardizer {
    mean: Option<Vector>,
    variance: Option<Vector>,
}

impl Standardizer {
    pub fn new() -> Self {
        Self {
            mean: None,
            variance: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if self.is_fitted() {
            return Ok(());
        }
        if data.nrows() == 0 {
            return Err(ModelError::EmptyDataset);
        }
        if let Some(((row, col), value)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::InvalidFeatures(format!(
                "feature value {value} at row {row}, column {col} is not finite"
            )));
        }

        let mean = data.mean_axis(Axis(0)).ok_or(ModelError::EmptyDataset)?;
        let mut variance = data.var_axis(Axis(0), 0.0);

        let constant_columns = variance.iter().filter(|&&v| v == 0.0).count();
        if constant_columns > 0 {
            warn!(
                constant_columns,
                "zero-variance feature columns, standardizing with variance 1"
            );
        }
        variance.mapv_inplace(|v| if v == 0.0 { 1.0 } else { v });

        self.mean = Some(mean);
        self.variance = Some(variance);
        Ok(())
    }

    /// Standardizes `data` and appends the bias column, giving `n x (f + 1)`.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let mean = self.mean.as_ref().ok_or(ModelError::Uninitialized("Standardizer"))?;
        let variance = self
            .variance
            .as_ref()
            .ok_or(ModelError::Uninitialized("Standardizer"))?;

        if data.ncols() != mean.len() {
            return Err(ModelError::ShapeMismatch {
                what: "feature columns",
                expected: mean.len(),
                actual: data.ncols(),
            });
        }

        let std = variance.mapv(f64::sqrt);
        let mut scaled = data.clone();
        for mut row in scaled.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= &std;
        }

        let n_features = data.ncols();
        let mut design = Matrix::ones((data.nrows(), n_features + 1));
        design.slice_mut(s![.., ..n_features]).assign(&scaled);
        Ok(design)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    pub fn is_fitted(&self) -> bool {
        self.mean.is_some() && self.variance.is_some()
    }

    pub fn mean(&self) -> Option<&Vector> {
        self.mean.as_ref()
    }

    /// Variance per column after the zero-to-one substitution.
    pub fn variance(&self) -> Option<&Vector> {
        self.variance.as_ref()
    }
}

/// Encodes integer class labels as one-hot rows of width `num_classes`.
pub fn one_hot(classes: &Vector, num_classes: usize) -> Result<Matrix> {
    let mut encoded = Matrix::zeros((classes.len(), num_classes));

    for (i, &class) in classes.iter().enumerate() {
        if !class.is_finite() || class.fract() != 0.0 || class < 0.0 {
            return Err(ModelError::InvalidLabels(format!(
                "class label {class} at row {i} is not a non-negative integer"
            )));
        }
        let index = class as usize;
        if index >= num_classes {
            return Err(ModelError::InvalidLabels(format!(
                "class label {index} at row {i} exceeds {num_classes} classes"
            )));
        }
        encoded[(i, index)] = 1.0;
    }

    Ok(encoded)
}
