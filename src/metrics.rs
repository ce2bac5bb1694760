use std::fmt::{self, Display};

use ndarray::ArrayView1;
use serde::Serialize;

use crate::error::{Result, ensure_size};

/// Regression accuracy of a model's predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub mse: f32,
    pub mae: f32,
    pub rmse: f32,
}

impl Metrics {
    /// Computes the metrics of `y_pred` against `y`.
    ///
    /// # Arguments
    /// * `y_pred` - The predictions.
    /// * `y` - The expected values.
    ///
    /// # Returns
    /// The metrics or an error if the two have different lengths.
    pub fn compute(y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Self> {
        ensure_size("targets", "predictions", y.len(), y_pred.len())?;

        let residuals = &y - &y_pred;
        let mse = residuals.mapv(|r| r * r).mean().unwrap_or_default();
        let mae = residuals.mapv(f32::abs).mean().unwrap_or_default();

        Ok(Self {
            mse,
            mae,
            rmse: mse.sqrt(),
        })
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'mse': {}, 'mae': {}, 'rmse': {}}}",
            self.mse, self.mae, self.rmse
        )
    }
}
