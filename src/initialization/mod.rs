mod constant;
mod random;
mod weight_gen;

pub use constant::ConstWeightGen;
pub use random::{RandWeightGen, xavier_limit};
pub use weight_gen::WeightGen;
