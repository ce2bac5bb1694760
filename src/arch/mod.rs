pub mod activations;
pub mod layers;
pub mod loss;
mod linear;
mod model;
mod neural_net;

pub use linear::LinearRegression;
pub use model::Model;
pub use neural_net::NeuralNetwork;
