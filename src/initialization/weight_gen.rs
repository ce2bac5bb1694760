use ndarray::{Array, ShapeBuilder};
use rand::Rng;

/// A source of initial parameter values.
pub trait WeightGen {
    /// Generates an array of the given shape.
    ///
    /// # Arguments
    /// * `shape` - The shape of the generated array.
    /// * `rng` - A random number generator, generators that don't need one leave it untouched.
    fn generate<Sh, R>(&self, shape: Sh, rng: &mut R) -> Array<f32, Sh::Dim>
    where
        Sh: ShapeBuilder,
        R: Rng + ?Sized;
}
