//! Linear models trained by minibatch gradient descent.
//!
//! A single [`GradientDescent`] trainer implements:
//! - linear regression (`LinkFunction::Identity`, scored with R²)
//! - binary logistic regression (`LinkFunction::Sigmoid`, scored with accuracy)
//! - multinomial logistic regression (`LinkFunction::Softmax`, scored with accuracy)
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use linfit::{Dataset, GradientDescent, TrainerConfig};
//! use ndarray::array;
//!
//! let dataset = Dataset::new(
//!     array![[1.0], [2.0], [3.0], [4.0]],
//!     array![[2.0], [4.0], [6.0], [8.0]],
//! ).unwrap();
//!
//! let config = TrainerConfig::new(4).with_iterations(200);
//! let mut model = GradientDescent::linear(dataset, config).unwrap();
//! model.train();
//! let predictions = model.predict(&array![[5.0]]).unwrap();
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use linfit::{Dataset, GradientDescent, TrainerConfig};
//! use ndarray::array;
//!
//! let dataset = Dataset::new(
//!     array![[1.0], [2.0], [3.0], [4.0]],
//!     array![[0.0], [0.0], [1.0], [1.0]],
//! ).unwrap();
//!
//! let mut model = GradientDescent::logistic(dataset, TrainerConfig::new(4)).unwrap();
//! model.train();
//! let predictions = model.predict(&array![[1.5], [3.5]]).unwrap();
//! let probabilities = model.predict_proba(&array![[1.5], [3.5]]).unwrap();
//! ```

mod config;
mod gradient_descent;
mod learning_rate;
mod link;

pub use config::TrainerConfig;
pub use gradient_descent::GradientDescent;
pub use learning_rate::{ErrorHistory, LearningRateController, TrainingState};
pub use link::{LOG_EPSILON, LinkFunction};
