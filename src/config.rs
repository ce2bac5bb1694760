use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

const DEFAULT_LEARNING_RATE: f32 = 0.01;
const DEFAULT_EPOCHS: usize = 1000;
const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(32).unwrap();
const DEFAULT_REGULARIZATION: f32 = 0.001;

/// Immutable training hyperparameters shared by every model in a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    learning_rate: f32,
    epochs: usize,
    batch_size: NonZeroUsize,
    regularization: f32,
}

impl ModelConfig {
    /// Creates a new model configuration.
    ///
    /// # Args
    /// * `learning_rate` - The length of each gradient descent step.
    /// * `epochs` - Number of full passes over the training set.
    /// * `batch_size` - Samples per batch. Training is always full batch, so this is
    ///   carried but never read by the models.
    /// * `regularization` - L2 penalty coefficient.
    ///
    /// # Returns
    /// A `ModelConfig` instance.
    pub fn new(
        learning_rate: f32,
        epochs: usize,
        batch_size: NonZeroUsize,
        regularization: f32,
    ) -> Self {
        Self {
            learning_rate,
            epochs,
            batch_size,
            regularization,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_regularization(mut self, regularization: f32) -> Self {
        self.regularization = regularization;
        self
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    pub fn regularization(&self) -> f32 {
        self.regularization
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            batch_size: DEFAULT_BATCH_SIZE,
            regularization: DEFAULT_REGULARIZATION,
        }
    }
}
