mod history;
mod trainer;

pub use history::{LossHistory, SNAPSHOT_EVERY};
pub use trainer::train_epochs;
