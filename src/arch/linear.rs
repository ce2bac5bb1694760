use std::rc::Rc;

use log::debug;
use ndarray::{Array0, Array1, ArrayView1, ArrayView2, Ix0, arr0};
use rand::{Rng, rngs::StdRng};

use super::{
    Model,
    loss::{L2, LossFn, Mse},
};
use crate::{
    config::ModelConfig,
    error::{MlErr, Result, ensure_size},
    initialization::{ConstWeightGen, RandWeightGen, WeightGen},
    optimization::{GradientDescent, Optimizer},
    training::{LossHistory, train_epochs},
};

/// Standard deviation of the initial weights.
const WEIGHT_STD: f32 = 0.01;

const NAME: &str = "Linear Regression";

/// Linear regression trained with full batch gradient descent on the squared error,
/// with an L2 penalty on the weights (never on the bias).
pub struct LinearRegression<R: Rng = StdRng> {
    config: Rc<ModelConfig>,
    rng: R,

    weights: Array1<f32>,
    bias: Array0<f32>,

    trained: bool,
    history: LossHistory,
}

impl<R: Rng> LinearRegression<R> {
    /// Creates a new, untrained `LinearRegression`.
    ///
    /// # Arguments
    /// * `config` - The training hyperparameters.
    /// * `rng` - The random number generator used to initialize the weights.
    pub fn new(config: Rc<ModelConfig>, rng: R) -> Self {
        Self {
            config,
            rng,
            weights: Array1::zeros(0),
            bias: arr0(0.),
            trained: false,
            history: LossHistory::new(NAME),
        }
    }

    /// The weight vector, empty until the first `fit`.
    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    pub fn bias(&self) -> f32 {
        self.bias[()]
    }
}

impl<R: Rng> Model for LinearRegression<R> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn fit(&mut self, x: ArrayView2<f32>, y: ArrayView1<f32>) -> Result<()> {
        ensure_size("targets", "features", y.len(), x.nrows())?;
        if x.nrows() == 0 {
            return Err(MlErr::EmptyDataset);
        }

        let (m, n) = x.dim();
        debug!(model = NAME; "fitting on {m} samples with {n} features");

        self.trained = false;
        self.history.clear();
        self.weights = RandWeightGen::normal(0., WEIGHT_STD)?.generate(n, &mut self.rng);
        self.bias = ConstWeightGen::zeros().generate(Ix0(), &mut self.rng);

        let mut optimizer = GradientDescent::new(self.config.learning_rate());
        let l2 = L2(self.config.regularization());
        let weights = &mut self.weights;
        let bias = &mut self.bias;

        train_epochs(self.config.epochs(), &mut self.history, |_| {
            let y_pred = x.dot(&*weights) + bias[()];
            let loss = Mse.loss(y_pred.view(), y) + l2.penalty(weights.view());

            // (2/m)·(ŷ - y)
            let d = Mse.loss_prime(y_pred.view(), y);
            let dw = x.t().dot(&d) + l2.gradient(weights.view());
            let db = arr0(d.sum());

            optimizer.update_params(weights.view_mut(), dw.view());
            optimizer.update_params(bias.view_mut(), db.view());

            Ok(loss)
        })?;

        self.trained = true;
        Ok(())
    }

    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        if !self.trained {
            return Err(MlErr::Untrained);
        }

        ensure_size("features", "weights", x.ncols(), self.weights.len())?;
        Ok(x.dot(&self.weights) + self.bias[()])
    }

    fn is_trained(&self) -> bool {
        self.trained
    }

    fn loss_history(&self) -> &LossHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, arr1, arr2};
    use rand::SeedableRng;

    use super::*;
    use crate::dataset::generate_synthetic_data;

    fn model(config: ModelConfig) -> LinearRegression {
        LinearRegression::new(Rc::new(config), StdRng::seed_from_u64(42))
    }

    #[test]
    fn untrained_predict_and_evaluate_fail() {
        let lr = model(ModelConfig::default());
        let x = Array2::<f32>::zeros((2, 3));
        let y = Array1::<f32>::zeros(2);

        assert!(!lr.is_trained());
        assert_eq!(lr.predict(x.view()), Err(MlErr::Untrained));
        assert_eq!(lr.evaluate(x.view(), y.view()), Err(MlErr::Untrained));
    }

    #[test]
    fn zero_epochs_keeps_the_initial_parameters() {
        let mut lr = model(ModelConfig::default().with_epochs(0));
        let data = generate_synthetic_data(20, 0.1, &mut StdRng::seed_from_u64(1));

        lr.fit(data.x(), data.y()).unwrap();

        // same draw the model does on initialization
        let mut rng = StdRng::seed_from_u64(42);
        let expected = RandWeightGen::normal(0., WEIGHT_STD)
            .unwrap()
            .generate(3usize, &mut rng);

        assert!(lr.is_trained());
        assert!(lr.loss_history().is_empty());
        assert_eq!(lr.weights(), expected);
        assert_eq!(lr.bias(), 0.);
    }

    #[test]
    fn one_epoch_is_a_single_gradient_step() {
        let config = ModelConfig::default()
            .with_epochs(1)
            .with_learning_rate(0.5)
            .with_regularization(0.);
        let mut lr = model(config);

        let x = arr2(&[[1.], [2.]]);
        let y = arr1(&[2., 4.]);
        lr.fit(x.view(), y.view()).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let w0 = RandWeightGen::normal(0., WEIGHT_STD)
            .unwrap()
            .generate(1usize, &mut rng)[0];

        // ŷ = [w0, 2w0], ŷ - y = [w0 - 2, 2w0 - 4]
        let r = [w0 - 2., 2. * w0 - 4.];
        let dw = (r[0] * 1. + r[1] * 2.) * (2. / 2.);
        let db = (r[0] + r[1]) * (2. / 2.);

        assert!((lr.weights()[0] - (w0 - 0.5 * dw)).abs() < 1e-5);
        assert!((lr.bias() - (0. - 0.5 * db)).abs() < 1e-5);

        let loss = (r[0] * r[0] + r[1] * r[1]) / 2.;
        assert_eq!(lr.loss_history().len(), 1);
        assert!((lr.loss_history().losses()[0] - loss).abs() < 1e-5);
    }

    #[test]
    fn history_has_one_snapshot_per_hundred_epochs() {
        let data = generate_synthetic_data(50, 0.1, &mut StdRng::seed_from_u64(3));

        for epochs in [1, 99, 100, 101, 250] {
            let mut lr = model(ModelConfig::default().with_epochs(epochs));
            lr.fit(data.x(), data.y()).unwrap();
            assert_eq!(lr.loss_history().len(), LossHistory::expected_len(epochs));
        }
    }

    #[test]
    fn loss_includes_the_l2_penalty() {
        let x = arr2(&[[0.], [0.]]);
        let y = arr1(&[0., 0.]);

        let mut plain = model(ModelConfig::default().with_epochs(1).with_regularization(0.));
        let mut ridge = model(ModelConfig::default().with_epochs(1).with_regularization(10.));
        plain.fit(x.view(), y.view()).unwrap();
        ridge.fit(x.view(), y.view()).unwrap();

        // the features are zero so the squared error term vanishes
        assert_eq!(plain.loss_history().losses()[0], 0.);
        assert!(ridge.loss_history().losses()[0] > 0.);
    }

    #[test]
    fn refit_resets_history() {
        let data = generate_synthetic_data(30, 0.1, &mut StdRng::seed_from_u64(5));
        let mut lr = model(ModelConfig::default().with_epochs(300));

        lr.fit(data.x(), data.y()).unwrap();
        lr.fit(data.x(), data.y()).unwrap();

        assert!(lr.is_trained());
        assert_eq!(lr.loss_history().len(), 3);
    }

    #[test]
    fn shape_errors() {
        let mut lr = model(ModelConfig::default().with_epochs(10));

        let x = Array2::<f32>::zeros((4, 3));
        assert!(matches!(
            lr.fit(x.view(), Array1::<f32>::zeros(3).view()),
            Err(MlErr::SizeMismatch { .. })
        ));
        assert_eq!(
            lr.fit(Array2::<f32>::zeros((0, 3)).view(), Array1::<f32>::zeros(0).view()),
            Err(MlErr::EmptyDataset)
        );

        lr.fit(x.view(), Array1::<f32>::zeros(4).view()).unwrap();
        assert!(matches!(
            lr.predict(Array2::<f32>::zeros((2, 2)).view()),
            Err(MlErr::SizeMismatch { got: 2, expected: 3, .. })
        ));
    }
}
