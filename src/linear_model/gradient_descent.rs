use super::config::TrainerConfig;
use super::learning_rate::{ErrorHistory, LearningRateController, TrainingState};
use super::link::LinkFunction;
use crate::Matrix;
use crate::dataset::Dataset;
use crate::error::{ModelError, Result};
use crate::metrics::{binary_accuracy, categorical_accuracy, r2_score};
use crate::preprocessing::Standardizer;
use ndarray::{ArrayView1, ArrayView2, s};
use tracing::{debug, info};

/// Minibatch gradient descent over a standardized design matrix.
///
/// One trainer covers linear, binary logistic and multinomial logistic
/// regression; the [`LinkFunction`] picks which. Construction fits the
/// [`Standardizer`] on the training features once and starts from zero
/// weights of shape `(features + 1) x outputs`, the last row being the
/// intercept. Each call to [`train`](Self::train) continues from the current
/// weights and learning rate.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    link: LinkFunction,
    config: TrainerConfig,
    standardizer: Standardizer,
    design: Matrix,
    labels: Matrix,
    weights: Matrix,
    state: TrainingState,
    controller: LearningRateController,
}

impl GradientDescent {
    pub fn new(dataset: Dataset, link: LinkFunction, config: TrainerConfig) -> Result<Self> {
        config.validate()?;

        let Dataset { features, labels } = dataset;
        if features.nrows() != labels.nrows() {
            return Err(ModelError::ShapeMismatch {
                what: "label rows",
                expected: features.nrows(),
                actual: labels.nrows(),
            });
        }

        let n_samples = features.nrows();
        if n_samples == 0 {
            return Err(ModelError::EmptyDataset);
        }
        if config.batch_size == 0 || config.batch_size > n_samples {
            return Err(ModelError::DegenerateBatch {
                batch_size: config.batch_size,
                n_samples,
            });
        }
        link.validate_labels(&labels)?;
        if features.iter().any(|x| !x.is_finite()) {
            return Err(ModelError::InvalidFeatures(
                "training features must be finite".to_string(),
            ));
        }

        let mut standardizer = Standardizer::new();
        let design = standardizer.fit_transform(&features)?;
        let weights = Matrix::zeros((design.ncols(), labels.ncols()));

        Ok(Self {
            link,
            state: TrainingState::new(config.learning_rate),
            config,
            standardizer,
            design,
            labels,
            weights,
            controller: LearningRateController::new(),
        })
    }

    /// Least-squares regression scored with R².
    pub fn linear(dataset: Dataset, config: TrainerConfig) -> Result<Self> {
        Self::new(dataset, LinkFunction::Identity, config)
    }

    /// Binary classification on 0/1 labels scored with accuracy.
    pub fn logistic(dataset: Dataset, config: TrainerConfig) -> Result<Self> {
        Self::new(dataset, LinkFunction::Sigmoid, config)
    }

    /// Multi-class classification on one-hot labels scored with accuracy.
    pub fn multinomial(dataset: Dataset, config: TrainerConfig) -> Result<Self> {
        Self::new(dataset, LinkFunction::Softmax, config)
    }

    /// Runs the configured number of epochs.
    pub fn train(&mut self) {
        self.train_epochs(self.config.iterations);
    }

    /// Runs `iterations` epochs of sequential minibatch updates.
    ///
    /// Rows past the last full batch are never visited. After every epoch the
    /// full-dataset loss is recorded and the learning rate adjusted.
    pub fn train_epochs(&mut self, iterations: usize) {
        let batch_size = self.config.batch_size;
        let batch_count = self.design.nrows() / batch_size;

        info!(
            link = self.link.name(),
            iterations,
            batch_size,
            batch_count,
            learning_rate = self.state.learning_rate,
            "starting gradient descent"
        );

        for _ in 0..iterations {
            for j in 0..batch_count {
                let (start, end) = (j * batch_size, (j + 1) * batch_size);
                gradient_step(
                    self.link,
                    &mut self.weights,
                    self.design.slice(s![start..end, ..]),
                    self.labels.slice(s![start..end, ..]),
                    self.state.learning_rate,
                );
            }

            let error = self.training_error();
            self.state.history.record(error);
            self.state.epochs += 1;
            self.controller.update(&mut self.state);

            debug!(
                epoch = self.state.epochs,
                error,
                learning_rate = self.state.learning_rate,
                "epoch complete"
            );
        }

        info!(
            epochs = self.state.epochs,
            error = ?self.state.history.latest(),
            learning_rate = self.state.learning_rate,
            "gradient descent finished"
        );
    }

    /// Activations before post-processing: scores, probabilities, or class
    /// probabilities per row.
    pub fn predict_proba(&self, features: &Matrix) -> Result<Matrix> {
        let design = self.standardizer.transform(features)?;
        Ok(self.link.activate(&design.dot(&self.weights)))
    }

    pub fn predict(&self, features: &Matrix) -> Result<Matrix> {
        let activations = self.predict_proba(features)?;
        Ok(self
            .link
            .postprocess(activations, self.config.decision_boundary))
    }

    /// R² for Identity, accuracy for Sigmoid and Softmax.
    pub fn test(&self, features: &Matrix, labels: &Matrix) -> Result<f64> {
        if features.nrows() != labels.nrows() {
            return Err(ModelError::ShapeMismatch {
                what: "label rows",
                expected: features.nrows(),
                actual: labels.nrows(),
            });
        }
        if labels.ncols() != self.weights.ncols() {
            return Err(ModelError::ShapeMismatch {
                what: "label columns",
                expected: self.weights.ncols(),
                actual: labels.ncols(),
            });
        }

        let predictions = self.predict(features)?;
        match self.link {
            LinkFunction::Identity => r2_score(labels, &predictions),
            LinkFunction::Sigmoid => binary_accuracy(labels, &predictions),
            LinkFunction::Softmax => categorical_accuracy(labels, &predictions),
        }
    }

    fn training_error(&self) -> f64 {
        let predictions = self.link.activate(&self.design.dot(&self.weights));
        self.link.loss(&self.labels, &predictions)
    }

    pub fn link(&self) -> LinkFunction {
        self.link
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn standardizer(&self) -> &Standardizer {
        &self.standardizer
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Last weight row, multiplying the bias column.
    pub fn intercept(&self) -> ArrayView1<'_, f64> {
        self.weights.row(self.weights.nrows() - 1)
    }

    pub fn learning_rate(&self) -> f64 {
        self.state.learning_rate
    }

    pub fn epochs_completed(&self) -> usize {
        self.state.epochs
    }

    pub fn history(&self) -> &ErrorHistory {
        &self.state.history
    }

    pub fn state(&self) -> &TrainingState {
        &self.state
    }
}

/// `W <- W - rate * Xᵀ(activate(XW) - y) / batch`.
fn gradient_step(
    link: LinkFunction,
    weights: &mut Matrix,
    x: ArrayView2<'_, f64>,
    y: ArrayView2<'_, f64>,
    learning_rate: f64,
) {
    let predictions = link.activate(&x.dot(&*weights));
    let differences = predictions - &y;
    let gradient = x.t().dot(&differences) / x.nrows() as f64;
    weights.scaled_add(-learning_rate, &gradient);
}
