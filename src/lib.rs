pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use linear_model::{
    ErrorHistory, GradientDescent, LearningRateController, LinkFunction, TrainerConfig,
    TrainingState,
};
pub use preprocessing::{Standardizer, one_hot};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let vec = Vector::zeros(5);
        let mat = Matrix::zeros((3, 4));
        assert_eq!(vec.len(), 5);
        assert_eq!(mat.shape(), &[3, 4]);
    }
}
