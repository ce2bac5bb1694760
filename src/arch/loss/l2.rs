use ndarray::{Array, ArrayView, Dimension};

/// L2 (ridge) penalty over a set of weights: `λ·Σw²`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct L2(pub f32);

impl L2 {
    pub fn penalty<D: Dimension>(&self, w: ArrayView<f32, D>) -> f32 {
        self.0 * w.mapv(|w| w * w).sum()
    }

    /// Gradient of the penalty with respect to `w`, that is `2λ·w`.
    pub fn gradient<D: Dimension>(&self, w: ArrayView<f32, D>) -> Array<f32, D> {
        &w * (2. * self.0)
    }
}
