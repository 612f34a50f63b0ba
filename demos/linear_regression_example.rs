use linfit::{Dataset, GradientDescent, Matrix, TrainerConfig};
use ndarray::{Axis, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Linear Regression Example ===\n");

    // horsepower, weight (tons), displacement -> fuel efficiency with a little noise
    let mut rng = StdRng::seed_from_u64(2024);
    let n_samples = 200;
    let mut features = Matrix::random_using((n_samples, 3), Uniform::new(0.0, 1.0), &mut rng);
    features.column_mut(0).mapv_inplace(|v| 50.0 + 200.0 * v);
    features.column_mut(1).mapv_inplace(|v| 1.0 + 3.0 * v);
    features.column_mut(2).mapv_inplace(|v| 70.0 + 380.0 * v);

    let noise = ndarray::Array1::random_using(n_samples, Uniform::new(-1.0, 1.0), &mut rng);
    let coefficients = array![-0.05, -4.0, -0.01];
    let mpg = features.dot(&coefficients) + 50.0 + &noise;
    let labels = mpg.insert_axis(Axis(1));

    let split = 150;
    let train = Dataset::new(
        features.slice(ndarray::s![..split, ..]).to_owned(),
        labels.slice(ndarray::s![..split, ..]).to_owned(),
    )?;
    let test_features = features.slice(ndarray::s![split.., ..]).to_owned();
    let test_labels = labels.slice(ndarray::s![split.., ..]).to_owned();

    println!("Training samples: {}", train.n_samples());
    println!("Test samples: {}", test_features.nrows());

    let config = TrainerConfig::new(10).with_learning_rate(0.1).with_iterations(50);
    let mut model = GradientDescent::linear(train, config)?;
    model.train();

    let r2 = model.test(&test_features, &test_labels)?;
    println!("\nR² on test set: {:.4}", r2);

    println!("\nMean squared error per epoch (oldest first):");
    for (epoch, mse) in model.history().chronological().iter().enumerate().step_by(10) {
        println!("  epoch {:>3}: {:.4}", epoch + 1, mse);
    }

    let prediction = model.predict(&array![[120.0, 2.0, 380.0]])?;
    println!("\nPredicted mpg for [120 hp, 2 t, 380 cc]: {:.2}", prediction[(0, 0)]);

    Ok(())
}
