use linfit::{Dataset, GradientDescent, Matrix, TrainerConfig, Vector, one_hot};
use ndarray::array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Multinomial Logistic Regression Example ===\n");

    let centers = [[0.0, 0.0], [8.0, 0.0], [4.0, 7.0], [8.0, 8.0]];
    let per_class = 50;
    let n_samples = per_class * centers.len();

    let mut rng = StdRng::seed_from_u64(7);
    let noise = Matrix::random_using((n_samples, 2), Uniform::new(-1.5, 1.5), &mut rng);

    let mut features = Matrix::zeros((n_samples, 2));
    let mut classes = Vector::zeros(n_samples);
    for i in 0..n_samples {
        let class = i % centers.len();
        features[(i, 0)] = centers[class][0] + noise[(i, 0)];
        features[(i, 1)] = centers[class][1] + noise[(i, 1)];
        classes[i] = class as f64;
    }
    let labels = one_hot(&classes, centers.len())?;

    let dataset = Dataset::new(features.clone(), labels.clone())?;
    let config = TrainerConfig::new(20).with_learning_rate(1.0).with_iterations(40);
    let mut model = GradientDescent::multinomial(dataset, config)?;
    model.train();

    let accuracy = model.test(&features, &labels)?;
    println!("Accuracy is {:.2}%", accuracy * 100.0);
    println!("Final cost: {:.4}", model.history().latest().unwrap_or(f64::NAN));

    let probe = array![[0.5, 0.5], [7.5, 0.2], [4.0, 6.0], [9.0, 9.0]];
    let predicted = model.predict(&probe)?;
    for (point, class) in probe.rows().into_iter().zip(predicted.iter()) {
        println!("{:?} -> class {}", point.to_vec(), class);
    }

    Ok(())
}
