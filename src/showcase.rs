use std::rc::Rc;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    arch::{LinearRegression, Model, NeuralNetwork},
    config::ModelConfig,
    dataset::{DEFAULT_NOISE, DEFAULT_SAMPLES, Dataset, generate_synthetic_data},
    error::Result,
    metrics::Metrics,
};

/// The title printed before a run.
pub const BANNER: &str = "🤖 Advanced Machine Learning Demo";

/// The default sample budget split 80/20 between training and testing.
pub const TRAIN_SAMPLES: usize = DEFAULT_SAMPLES * 4 / 5;
pub const TEST_SAMPLES: usize = DEFAULT_SAMPLES - TRAIN_SAMPLES;

pub const HIDDEN_SIZES: [usize; 2] = [10, 5];

/// A model's name along with its metrics on the test set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub name: &'static str,
    pub metrics: Metrics,
}

/// The outcome of training both models on the same data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub linear: Evaluation,
    pub neural: Evaluation,
}

impl Comparison {
    /// The model with the lower test RMSE, the neural network on a tie.
    pub fn winner(&self) -> &Evaluation {
        if self.linear.metrics.rmse < self.neural.metrics.rmse {
            &self.linear
        } else {
            &self.neural
        }
    }
}

/// Builds the random source, seeded if a seed is given and from the OS otherwise.
pub fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a train and a test set, trains a linear regression and a neural network on
/// the former and evaluates both on the latter.
///
/// Each model's section header and results are printed to stdout as it finishes.
///
/// # Arguments
/// * `config` - The hyperparameters shared by both models.
/// * `rng` - The random source the data and every model's initialization derive from.
///
/// # Returns
/// Both evaluations or the first error raised while training.
pub fn run(config: ModelConfig, rng: &mut StdRng) -> Result<Comparison> {
    let train = generate_synthetic_data(TRAIN_SAMPLES, DEFAULT_NOISE, rng);
    let test = generate_synthetic_data(TEST_SAMPLES, DEFAULT_NOISE, rng);
    debug!("generated {} training and {} test samples", train.len(), test.len());

    let config = Rc::new(config);

    let mut linear = LinearRegression::new(config.clone(), StdRng::from_rng(rng));
    let linear = train_and_evaluate(&mut linear, '📊', &train, &test)?;

    let mut neural = NeuralNetwork::new(config, HIDDEN_SIZES.to_vec(), StdRng::from_rng(rng));
    let neural = train_and_evaluate(&mut neural, '🧠', &train, &test)?;

    Ok(Comparison { linear, neural })
}

/// The line announcing that `name` starts training.
pub fn training_header(icon: char, name: &str) -> String {
    format!("\n{icon} Training {name}...")
}

fn train_and_evaluate<M: Model>(
    model: &mut M,
    icon: char,
    train: &Dataset,
    test: &Dataset,
) -> Result<Evaluation> {
    let name = model.name();
    println!("{}", training_header(icon, name));

    model.fit(train.x(), train.y())?;
    if let Some(loss) = model.loss_history().last() {
        info!(model = name; "last recorded loss {loss:.6}");
    }

    let metrics = model.evaluate(test.x(), test.y())?;
    println!("{name} Results: {metrics}");

    Ok(Evaluation { name, metrics })
}
