use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{Result, ensure_size};

/// Default amount of samples drawn by `generate_synthetic_data`.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Default standard deviation of the noise added to the targets.
pub const DEFAULT_NOISE: f32 = 0.1;

/// Coefficients of the linear relationship the synthetic targets follow.
pub const TRUE_COEFFICIENTS: [f32; 3] = [2.0, -1.5, 0.8];

/// A set of samples: one feature row per target value.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array2<f32>,
    y: Array1<f32>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The feature matrix, one sample per row.
    /// * `y` - The targets, one per sample.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the sample counts differ.
    pub fn new(x: Array2<f32>, y: Array1<f32>) -> Result<Self> {
        ensure_size("targets", "features", y.len(), x.nrows())?;
        Ok(Self { x, y })
    }

    /// Returns the amount of samples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Returns the dimensionality of each feature row.
    pub fn dim(&self) -> usize {
        self.x.ncols()
    }

    pub fn x(&self) -> ArrayView2<'_, f32> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f32> {
        self.y.view()
    }
}

/// Generates a synthetic regression dataset.
///
/// The features are drawn from a standard normal distribution and the targets follow
/// `2·x1 - 1.5·x2 + 0.8·x3` plus gaussian noise scaled by `noise_level`.
///
/// # Arguments
/// * `n_samples` - The amount of rows to generate.
/// * `noise_level` - The standard deviation of the noise added to each target.
/// * `rng` - The random number generator to draw from.
///
/// # Returns
/// The generated dataset.
pub fn generate_synthetic_data<R: Rng + ?Sized>(
    n_samples: usize,
    noise_level: f32,
    rng: &mut R,
) -> Dataset {
    let shape = (n_samples, TRUE_COEFFICIENTS.len());
    let x = Array2::<f32>::random_using(shape, StandardNormal, rng);
    let noise = Array1::<f32>::random_using(n_samples, StandardNormal, rng);

    let [a, b, c] = TRUE_COEFFICIENTS;
    let y = x
        .axis_iter(Axis(0))
        .zip(&noise)
        .map(|(row, &e)| a * row[0] + b * row[1] + c * row[2] + noise_level * e)
        .collect();

    Dataset { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn noiseless_targets_follow_the_linear_relationship_exactly() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = generate_synthetic_data(5, 0.0, &mut rng);

        assert_eq!(dataset.x().dim(), (5, 3));
        assert_eq!(dataset.y().len(), 5);

        for (row, &y) in dataset.x().axis_iter(Axis(0)).zip(dataset.y()) {
            assert_eq!(y, 2.0 * row[0] - 1.5 * row[1] + 0.8 * row[2]);
        }
    }

    #[test]
    fn noise_moves_targets_off_the_line() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = generate_synthetic_data(200, 0.5, &mut rng);

        let residuals: Vec<f32> = dataset
            .x()
            .axis_iter(Axis(0))
            .zip(dataset.y())
            .map(|(row, &y)| y - (2.0 * row[0] - 1.5 * row[1] + 0.8 * row[2]))
            .collect();

        assert!(residuals.iter().any(|r| r.abs() > 1e-3));

        let var = residuals.iter().map(|r| r * r).sum::<f32>() / residuals.len() as f32;
        let std = var.sqrt();
        assert!((0.3..0.7).contains(&std), "noise std: {std}");
    }

    #[test]
    fn same_seed_same_data() {
        let a = generate_synthetic_data(10, 0.1, &mut StdRng::seed_from_u64(3));
        let b = generate_synthetic_data(10, 0.1, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn mismatched_sample_counts_are_rejected() {
        let x = Array2::<f32>::zeros((4, 3));
        let y = Array1::<f32>::zeros(3);
        assert!(Dataset::new(x, y).is_err());
    }

    #[test]
    fn empty_dataset() {
        let dataset = generate_synthetic_data(0, DEFAULT_NOISE, &mut StdRng::seed_from_u64(1));
        assert!(dataset.is_empty());
        assert_eq!(dataset.dim(), 3);
    }
}
