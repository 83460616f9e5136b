use crate::data::dataset::Dataset;
use crate::errors::{NetworkError, Result};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::RunningTotals;

/// One online pass over `data` in its original order: forward, loss,
/// backward, weight update, then compare the decoded label.
///
/// The label is decoded from the forward-pass activations of the same
/// example; the update does not change them.
pub fn train_epoch(
    network: &mut Network,
    optimizer: &Sgd,
    data: &Dataset,
    totals: &mut RunningTotals,
) -> Result<()> {
    totals.reset();
    if data.is_empty() {
        return Err(NetworkError::EmptyDataset { phase: "training" });
    }

    for (input, label) in data.iter() {
        network.forward(input)?;
        let loss = network.loss(label);
        network.backward(label)?;
        optimizer.step(network);

        let predicted = network.predict()?;
        totals.record(loss, predicted == label);
    }
    Ok(())
}

/// Forward pass, loss and label comparison for every example; no weight changes.
pub fn validate_epoch(
    network: &mut Network,
    data: &Dataset,
    totals: &mut RunningTotals,
) -> Result<()> {
    totals.reset();
    if data.is_empty() {
        return Err(NetworkError::EmptyDataset { phase: "validation" });
    }

    for (input, label) in data.iter() {
        network.forward(input)?;
        let loss = network.loss(label);
        let predicted = network.predict()?;
        totals.record(loss, predicted == label);
    }
    Ok(())
}
