use log::info;

/// Epochs between two loss snapshots.
pub const SNAPSHOT_EVERY: usize = 100;

/// Loss snapshots taken during training, one every `SNAPSHOT_EVERY` epochs starting at
/// epoch 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossHistory {
    model: &'static str,
    losses: Vec<f32>,
}

impl LossHistory {
    /// Creates an empty `LossHistory`.
    ///
    /// # Arguments
    /// * `model` - The name of the model being trained, attached to the progress logs.
    pub fn new(model: &'static str) -> Self {
        Self {
            model,
            losses: Vec::new(),
        }
    }

    /// Records the loss of `epoch` if it falls on a snapshot boundary.
    ///
    /// # Returns
    /// Whether the loss was recorded.
    pub fn record(&mut self, epoch: usize, loss: f32) -> bool {
        if epoch % SNAPSHOT_EVERY != 0 {
            return false;
        }

        self.losses.push(loss);
        info!(model = self.model; "Epoch {epoch}: Loss = {loss:.6}");
        true
    }

    pub fn clear(&mut self) {
        self.losses.clear();
    }

    pub fn losses(&self) -> &[f32] {
        &self.losses
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn last(&self) -> Option<f32> {
        self.losses.last().copied()
    }

    /// The amount of snapshots a run of `epochs` epochs produces.
    pub fn expected_len(epochs: usize) -> usize {
        epochs.div_ceil(SNAPSHOT_EVERY)
    }
}
