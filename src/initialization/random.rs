use ndarray::{Array, ShapeBuilder};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use super::WeightGen;
use crate::error::Result;

/// A weight generator that follows a certain probabilistic distribution.
#[derive(Clone, Debug)]
pub struct RandWeightGen<D: Distribution<f32>> {
    distribution: D,
}

impl<D: Distribution<f32>> RandWeightGen<D> {
    /// Creates a new `RandWeightGen` weight generator.
    ///
    /// # Arguments
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(distribution: D) -> Self {
        Self { distribution }
    }
}

impl RandWeightGen<Uniform<f32>> {
    /// Creates a new `RandWeightGen` weight generator with a uniform distribution.
    ///
    /// # Arguments
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high).
    pub fn uniform(low: f32, high: f32) -> Result<Self> {
        Ok(Self::new(Uniform::new(low, high)?))
    }

    /// Creates a new `RandWeightGen` weight generator using Xavier uniform initialization,
    /// sampling from `±√(6 / (fan_in + fan_out))`.
    ///
    /// # Arguments
    /// * `fan_in` - The number of input units in the weight tensor.
    /// * `fan_out` - The number of output units in the weight tensor.
    ///
    /// # Returns
    /// An error if the calculated range is invalid.
    pub fn xavier_uniform(fan_in: usize, fan_out: usize) -> Result<Self> {
        let range = xavier_limit(fan_in, fan_out);
        Self::uniform(-range, range)
    }
}

impl RandWeightGen<Normal<f32>> {
    /// Creates a new `RandWeightGen` weight generator with a normal distribution.
    ///
    /// # Arguments
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// An error if `std_dev` is not finite (Nan or infinite).
    pub fn normal(mean: f32, std_dev: f32) -> Result<Self> {
        Ok(Self::new(Normal::new(mean, std_dev)?))
    }
}

impl<D: Distribution<f32>> WeightGen for RandWeightGen<D> {
    fn generate<Sh, R>(&self, shape: Sh, rng: &mut R) -> Array<f32, Sh::Dim>
    where
        Sh: ShapeBuilder,
        R: Rng + ?Sized,
    {
        Array::<f32, _>::random_using(shape, &self.distribution, rng)
    }
}

/// The Xavier/Glorot uniform bound for a layer.
pub fn xavier_limit(fan_in: usize, fan_out: usize) -> f32 {
    (6. / (fan_in + fan_out) as f32).sqrt()
}
