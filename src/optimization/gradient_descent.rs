use ndarray::{ArrayView, ArrayViewMut, Dimension};

use super::Optimizer;

/// Gradient descent optimization algorithm.
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params<D: Dimension>(
        &mut self,
        mut params: ArrayViewMut<f32, D>,
        grad: ArrayView<f32, D>,
    ) {
        params.scaled_add(-self.learning_rate, &grad);
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{arr0, arr1, arr2};

    use super::*;

    #[test]
    fn steps_against_the_gradient() {
        let mut optimizer = GradientDescent::new(0.5);
        let mut params = arr1(&[1., 2., 3.]);
        let grad = arr1(&[2., 0., -2.]);

        optimizer.update_params(params.view_mut(), grad.view());
        assert_eq!(params, arr1(&[0., 2., 4.]));
    }

    #[test]
    fn scalar_and_matrix_params() {
        let mut optimizer = GradientDescent::new(0.1);

        let mut bias = arr0(1.);
        optimizer.update_params(bias.view_mut(), arr0(10.).view());
        assert_eq!(bias[()], 0.);

        let mut w = arr2(&[[1., 1.], [1., 1.]]);
        let g = arr2(&[[10., 0.], [0., -10.]]);
        optimizer.update_params(w.view_mut(), g.view());
        assert_eq!(w, arr2(&[[0., 1.], [1., 2.]]));
    }

    #[test]
    fn zero_learning_rate_is_a_no_op() {
        let mut optimizer = GradientDescent::new(0.);
        let mut params = arr1(&[1., 2.]);

        optimizer.update_params(params.view_mut(), arr1(&[5., 5.]).view());
        assert_eq!(params, arr1(&[1., 2.]));
    }
}
