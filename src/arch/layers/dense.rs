use ndarray::prelude::*;
use rand::Rng;

use crate::{
    arch::activations::Sigmoid,
    error::{Result, ensure_size},
    initialization::{ConstWeightGen, RandWeightGen, WeightGen},
    optimization::Optimizer,
};

/// A fully connected layer followed by a sigmoid activation.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense {
    weight: Array2<f32>,
    bias: Array2<f32>,
    act_fn: Sigmoid,
}

impl Dense {
    /// Creates a new `Dense` from its parameters.
    ///
    /// # Arguments
    /// * `weight` - The `fan_in × fan_out` weight matrix.
    /// * `bias` - The `1 × fan_out` bias row.
    ///
    /// # Returns
    /// A new `Dense` or an error if the bias doesn't match the weight's output size.
    pub fn new(weight: Array2<f32>, bias: Array2<f32>) -> Result<Self> {
        ensure_size("bias rows", "row vector", bias.nrows(), 1)?;
        ensure_size("bias", "weight columns", bias.ncols(), weight.ncols())?;

        Ok(Self {
            weight,
            bias,
            act_fn: Sigmoid::new(),
        })
    }

    /// Creates a new `Dense` with its weights drawn using Xavier uniform initialization and
    /// its biases set to zero.
    ///
    /// # Arguments
    /// * `fan_in` - The amount of inputs.
    /// * `fan_out` - The amount of outputs.
    /// * `rng` - A random number generator.
    pub fn xavier<R: Rng + ?Sized>(fan_in: usize, fan_out: usize, rng: &mut R) -> Result<Self> {
        let weight_gen = RandWeightGen::xavier_uniform(fan_in, fan_out)?;
        let weight = weight_gen.generate((fan_in, fan_out), rng);
        let bias = ConstWeightGen::zeros().generate((1usize, fan_out), rng);
        Self::new(weight, bias)
    }

    pub fn fan_in(&self) -> usize {
        self.weight.nrows()
    }

    pub fn fan_out(&self) -> usize {
        self.weight.ncols()
    }

    pub fn weight(&self) -> ArrayView2<'_, f32> {
        self.weight.view()
    }

    pub fn bias(&self) -> ArrayView2<'_, f32> {
        self.bias.view()
    }

    pub fn act_fn(&self) -> &Sigmoid {
        &self.act_fn
    }

    /// Computes `σ(x·W + b)`.
    ///
    /// # Arguments
    /// * `x` - The input, one sample per row.
    ///
    /// # Returns
    /// The layer's activation or an error if `x` doesn't have `fan_in` columns.
    pub fn forward(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        ensure_size("input", "layer fan in", x.ncols(), self.fan_in())?;

        let mut a = x.dot(&self.weight) + &self.bias;
        a.mapv_inplace(|z| self.act_fn.f(z));
        Ok(a)
    }

    /// Updates the parameters given the layer's error signal and propagates it backward.
    ///
    /// # Arguments
    /// * `x` - The input this layer received on the forward pass.
    /// * `delta` - The error signal at this layer's output.
    /// * `optimizer` - Dictates how the parameters are updated.
    ///
    /// # Returns
    /// `delta·Wᵀ` computed with the already updated weights. The caller is responsible for
    /// applying the previous layer's activation derivative.
    pub fn backward<O: Optimizer>(
        &mut self,
        x: ArrayView2<f32>,
        delta: ArrayView2<f32>,
        optimizer: &mut O,
    ) -> Result<Array2<f32>> {
        ensure_size("input rows", "delta rows", x.nrows(), delta.nrows())?;
        ensure_size("delta", "layer fan out", delta.ncols(), self.fan_out())?;

        let m = x.nrows() as f32;
        let dw = x.t().dot(&delta) / m;
        let db = delta
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(self.fan_out()))
            .insert_axis(Axis(0));

        optimizer.update_params(self.weight.view_mut(), dw.view());
        optimizer.update_params(self.bias.view_mut(), db.view());

        Ok(delta.dot(&self.weight.t()))
    }
}
