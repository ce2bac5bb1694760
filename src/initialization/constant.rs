use ndarray::{Array, ShapeBuilder};
use rand::Rng;

use super::WeightGen;

/// A weight generator that always generates the same value.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstWeightGen {
    value: f32,
}

impl ConstWeightGen {
    /// Creates a new `ConstWeightGen` weight generator.
    ///
    /// # Arguments
    /// * `value` - The value to always generate.
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// A generator of zeros.
    pub fn zeros() -> Self {
        Self::new(0.)
    }
}

impl WeightGen for ConstWeightGen {
    fn generate<Sh, R>(&self, shape: Sh, _rng: &mut R) -> Array<f32, Sh::Dim>
    where
        Sh: ShapeBuilder,
        R: Rng + ?Sized,
    {
        Array::from_elem(shape, self.value)
    }
}
