use std::{iter, rc::Rc};

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::{Rng, rngs::StdRng};

use super::{
    Model,
    layers::Dense,
    loss::{LossFn, Mse},
};
use crate::{
    config::ModelConfig,
    error::{MlErr, Result, ensure_size},
    optimization::GradientDescent,
    training::{LossHistory, train_epochs},
};

const NAME: &str = "Neural Network";

/// A fully connected feedforward network with a sigmoid after every layer, output layer
/// included, trained by full batch backpropagation.
pub struct NeuralNetwork<R: Rng = StdRng> {
    config: Rc<ModelConfig>,
    rng: R,
    hidden_sizes: Vec<usize>,
    layers: Vec<Dense>,

    trained: bool,
    history: LossHistory,
}

impl<R: Rng> NeuralNetwork<R> {
    /// Creates a new, untrained `NeuralNetwork`.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `hidden_sizes` - The width of each hidden layer, from input to output.
    /// * `rng` - The random number generator used to initialize the layers.
    pub fn new(config: Rc<ModelConfig>, hidden_sizes: Vec<usize>, rng: R) -> Self {
        Self {
            config,
            rng,
            hidden_sizes,
            layers: Vec::new(),
            trained: false,
            history: LossHistory::new(NAME),
        }
    }

    /// The layers, empty until the first `fit`.
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Trains the network against a target with one column per output unit.
    ///
    /// # Arguments
    /// * `x` - The features, one sample per row.
    /// * `y` - The targets, one sample per row.
    ///
    /// # Returns
    /// An error if the sample counts differ or the dataset is empty.
    pub fn fit_matrix(&mut self, x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<()> {
        ensure_size("targets", "features", y.nrows(), x.nrows())?;
        if x.nrows() == 0 {
            return Err(MlErr::EmptyDataset);
        }

        self.trained = false;
        self.history.clear();
        self.initialize_layers(x.ncols(), y.ncols())?;

        let mut optimizer = GradientDescent::new(self.config.learning_rate());
        let layers = &mut self.layers;

        train_epochs(self.config.epochs(), &mut self.history, |_| {
            let activations = forward_trace(layers.as_slice(), x)?;
            let n_layers = layers.len();
            let y_pred = &activations[n_layers];

            let loss = Mse.loss(y_pred.view(), y);

            let act_fn = *layers[n_layers - 1].act_fn();
            let mut delta = y_pred - &y;
            delta.zip_mut_with(y_pred, |d, &a| *d *= act_fn.df(a));

            for i in (0..n_layers).rev() {
                let d = layers[i].backward(activations[i].view(), delta.view(), &mut optimizer)?;

                if i > 0 {
                    let act_fn = *layers[i - 1].act_fn();
                    delta = d;
                    delta.zip_mut_with(&activations[i], |d, &a| *d *= act_fn.df(a));
                }
            }

            Ok(loss)
        })?;

        self.trained = true;
        Ok(())
    }

    /// Predicts one row of outputs per row of `x`.
    ///
    /// # Returns
    /// The predictions, `MlErr::Untrained` if the network was never fitted or
    /// `MlErr::SizeMismatch` if `x` doesn't match the input layer.
    pub fn predict_matrix(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if !self.trained {
            return Err(MlErr::Untrained);
        }

        let mut a = x.to_owned();
        for layer in &self.layers {
            a = layer.forward(a.view())?;
        }

        Ok(a)
    }

    /// Reallocates every layer, discarding any previous parameters.
    fn initialize_layers(&mut self, input_size: usize, output_size: usize) -> Result<()> {
        let sizes: Vec<usize> = iter::once(input_size)
            .chain(self.hidden_sizes.iter().copied())
            .chain(iter::once(output_size))
            .collect();

        debug!(model = NAME; "initializing layers with sizes {sizes:?}");

        self.layers = sizes
            .windows(2)
            .map(|dim| Dense::xavier(dim[0], dim[1], &mut self.rng))
            .collect::<Result<_>>()?;

        Ok(())
    }
}

/// Runs a forward pass keeping every intermediate activation, the input included.
fn forward_trace(layers: &[Dense], x: ArrayView2<f32>) -> Result<Vec<Array2<f32>>> {
    let mut activations = Vec::with_capacity(layers.len() + 1);
    activations.push(x.to_owned());

    for layer in layers {
        let a = layer.forward(activations[activations.len() - 1].view())?;
        activations.push(a);
    }

    Ok(activations)
}

impl<R: Rng> Model for NeuralNetwork<R> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fit(&mut self, x: ArrayView2<f32>, y: ArrayView1<f32>) -> Result<()> {
        self.fit_matrix(x, y.insert_axis(Axis(1)))
    }

    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        let y_pred = self.predict_matrix(x)?;
        Ok(y_pred.into_iter().collect())
    }

    fn is_trained(&self) -> bool {
        self.trained
    }

    fn loss_history(&self) -> &LossHistory {
        &self.history
    }
}
