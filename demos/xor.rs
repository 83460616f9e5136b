/// XOR with the online backprop engine.
///
/// Architecture: 3 inputs (x1, x2, constant 1.0) → 5 (Sigmoid) → 2 one-hot outputs
/// Learning rate: 0.5, epochs: 10000, seed: 0
///
/// The units carry no bias term, so the constant third input plays that role.
///
/// Run with:
///   RUST_LOG=info cargo run --example xor --release
use ferrite_mlp::{
    ActivationFunction, Dataset, Network, OutputDecoding, Topology, TrainConfig, Trainer,
};

fn main() -> ferrite_mlp::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let inputs = vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 1.0],
    ];
    let labels = vec![0, 1, 1, 0];

    let network = Network::new(
        Topology::new(3, 1, 5, 2),
        ActivationFunction::Sigmoid,
        OutputDecoding::OneHot,
    )?;
    let training = Dataset::new(inputs.clone(), labels.clone())?;
    let validation = Dataset::new(inputs.clone(), labels)?;

    let mut trainer = Trainer::initialize(
        network,
        TrainConfig::new(0.5, 0, 10_000),
        training,
        validation,
    )?;

    let history = trainer.train_and_validate()?;
    for stats in history.iter().filter(|s| s.epoch % 1000 == 0) {
        println!(
            "Epoch {}: accuracy = {:.2}, loss = {:.6}",
            stats.epoch, stats.train.accuracy, stats.train.loss
        );
    }

    let mut network = trainer.into_network();
    for input in &inputs {
        let out = network.forward(input)?;
        println!(
            "Input: {:?} -> Output: [{:.4}, {:.4}] -> {}",
            &input[..2], out[0], out[1], network.predict()?
        );
    }
    Ok(())
}
