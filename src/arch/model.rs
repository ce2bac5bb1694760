use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::{error::Result, metrics::Metrics, training::LossHistory};

/// A trainable regression model.
///
/// A model starts untrained, becomes trained after a successful `fit` and stays trained
/// from then on. Fitting again restarts training from freshly initialized parameters.
pub trait Model {
    /// A human readable name for the model.
    fn name(&self) -> &'static str;

    /// Trains the model, updating its parameters in place.
    ///
    /// # Arguments
    /// * `x` - The features, one sample per row.
    /// * `y` - The targets, one per sample.
    ///
    /// # Returns
    /// An error if the sample counts differ or the dataset is empty.
    fn fit(&mut self, x: ArrayView2<f32>, y: ArrayView1<f32>) -> Result<()>;

    /// Predicts one value per row of `x`.
    ///
    /// # Returns
    /// The predictions, `MlErr::Untrained` if the model was never fitted or
    /// `MlErr::SizeMismatch` if `x` doesn't have as many columns as the training features.
    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>>;

    fn is_trained(&self) -> bool;

    /// The loss snapshots taken by the last `fit`.
    fn loss_history(&self) -> &LossHistory;

    /// Measures the model's predictions against the expected targets.
    ///
    /// # Arguments
    /// * `x` - The features, one sample per row.
    /// * `y` - The expected targets.
    ///
    /// # Returns
    /// The metrics or any error `predict` returns.
    fn evaluate(&self, x: ArrayView2<f32>, y: ArrayView1<f32>) -> Result<Metrics> {
        let y_pred = self.predict(x)?;
        Metrics::compute(y_pred.view(), y)
    }
}
