use super::LossHistory;
use crate::error::Result;

/// Runs a fixed amount of epochs, there is no convergence check nor early stopping.
///
/// # Arguments
/// * `epochs` - The amount of epochs to run.
/// * `history` - Where the loss snapshots are recorded.
/// * `epoch_fn` - Performs one full-batch update given the epoch index and returns the loss
///   measured before that update.
///
/// # Returns
/// An error if any epoch failed, training stops at the first failure.
pub fn train_epochs<F>(epochs: usize, history: &mut LossHistory, mut epoch_fn: F) -> Result<()>
where
    F: FnMut(usize) -> Result<f32>,
{
    for epoch in 0..epochs {
        let loss = epoch_fn(epoch)?;
        history.record(epoch, loss);
    }

    Ok(())
}
