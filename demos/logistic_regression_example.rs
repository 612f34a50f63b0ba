use linfit::{Dataset, GradientDescent, TrainerConfig};
use ndarray::array;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Logistic Regression Classification Example ===\n");

    // Feature: hours studied, Target: pass (1) or fail (0)
    let hours_studied = array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0], [7.0], [8.0]];
    let passed = array![[0.0], [0.0], [0.0], [1.0], [1.0], [1.0], [1.0], [1.0]];

    println!("Training data:");
    println!("Hours studied: {:?}", hours_studied.column(0));
    println!("Passed exam: {:?}", passed.column(0));

    let dataset = Dataset::new(hours_studied.clone(), passed.clone())?;
    let config = TrainerConfig::new(4)
        .with_learning_rate(0.5)
        .with_iterations(100)
        .with_decision_boundary(0.5);

    let mut model = GradientDescent::logistic(dataset, config)?;
    model.train();

    println!("\nModel training completed!");
    println!("Final learning rate: {:.5}", model.learning_rate());
    println!("Cost history (oldest first, first 5): {:?}", &model.history().chronological()[..5]);

    let accuracy = model.test(&hours_studied, &passed)?;
    println!("\nTraining accuracy: {:.2}%", accuracy * 100.0);

    println!("\nPredictions on new data:");
    let new_hours = array![[2.5], [5.5], [9.0]];
    let new_predictions = model.predict(&new_hours)?;
    let new_probabilities = model.predict_proba(&new_hours)?;

    for ((&hours, &prediction), &probability) in new_hours
        .column(0)
        .iter()
        .zip(new_predictions.iter())
        .zip(new_probabilities.iter())
    {
        let outcome = if prediction == 1.0 { "Pass" } else { "Fail" };
        println!(
            "Hours: {:.1} → Prediction: {} (probability: {:.3})",
            hours, outcome, probability
        );
    }

    Ok(())
}
