use crate::{Matrix, Vector};
use crate::error::{ModelError, Result};
use ndarray::Axis;

fn check_same_shape(y_true: &Matrix, y_pred: &Matrix) -> Result<()> {
    if y_true.nrows() != y_pred.nrows() {
        return Err(ModelError::ShapeMismatch {
            what: "prediction rows",
            expected: y_true.nrows(),
            actual: y_pred.nrows(),
        });
    }
    if y_true.ncols() != y_pred.ncols() {
        return Err(ModelError::ShapeMismatch {
            what: "prediction columns",
            expected: y_true.ncols(),
            actual: y_pred.ncols(),
        });
    }
    if y_true.is_empty() {
        return Err(ModelError::EmptyDataset);
    }
    Ok(())
}

/// Mean of the squared residuals over every cell.
pub fn mean_squared_error(y_true: &Matrix, y_pred: &Matrix) -> Result<f64> {
    check_same_shape(y_true, y_pred)?;

    let diff = y_true - y_pred;
    let mse = diff.mapv(|x| x * x).sum() / diff.len() as f64;
    Ok(mse)
}

/// Coefficient of determination, taking the label mean over all cells.
pub fn r2_score(y_true: &Matrix, y_pred: &Matrix) -> Result<f64> {
    check_same_shape(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// `(n - Σ|y - ŷ|) / n` for 0/1 labels and 0/1 predictions.
pub fn binary_accuracy(y_true: &Matrix, y_pred: &Matrix) -> Result<f64> {
    check_same_shape(y_true, y_pred)?;

    let n = y_true.nrows() as f64;
    let wrong = (y_true - y_pred).mapv(f64::abs).sum();
    Ok((n - wrong) / n)
}

/// Accuracy of predicted class indices (`n x 1`) against one-hot labels.
pub fn categorical_accuracy(one_hot_labels: &Matrix, predicted_classes: &Matrix) -> Result<f64> {
    if one_hot_labels.nrows() != predicted_classes.nrows() {
        return Err(ModelError::ShapeMismatch {
            what: "prediction rows",
            expected: one_hot_labels.nrows(),
            actual: predicted_classes.nrows(),
        });
    }
    if predicted_classes.ncols() != 1 {
        return Err(ModelError::ShapeMismatch {
            what: "prediction columns",
            expected: 1,
            actual: predicted_classes.ncols(),
        });
    }
    if one_hot_labels.nrows() == 0 {
        return Err(ModelError::EmptyDataset);
    }

    let actual = argmax_rows(one_hot_labels);
    let wrong = actual
        .iter()
        .zip(predicted_classes.column(0).iter())
        .filter(|&(&a, &p)| a != p)
        .count();

    let n = one_hot_labels.nrows() as f64;
    Ok((n - wrong as f64) / n)
}

/// Column index of the largest entry in each row; ties go to the lowest index.
pub fn argmax_rows(values: &Matrix) -> Vector {
    values
        .axis_iter(Axis(0))
        .map(|row| {
            let mut best = 0;
            for (j, &v) in row.iter().enumerate() {
                if v > row[best] {
                    best = j;
                }
            }
            best as f64
        })
        .collect()
}
