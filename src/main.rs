use anyhow::Context;
use env_logger::Env;
use log::debug;

use regression_showcase::{
    config::ModelConfig,
    showcase::{self, Comparison},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("{}", showcase::BANNER);
    println!("{}", "=".repeat(50));

    let config = ModelConfig::default();
    debug!("running with {config:?}");

    let mut rng = showcase::generate_rng(None);
    let comparison = showcase::run(config, &mut rng).context("failed to run the showcase")?;

    report(&comparison);

    let json = serde_json::to_string(&comparison).context("failed to serialize the results")?;
    debug!("results: {json}");

    Ok(())
}

fn report(comparison: &Comparison) {
    let Comparison { linear, neural } = comparison;

    println!("\n🏆 Model Comparison:");
    println!("{} RMSE: {:.4}", linear.name, linear.metrics.rmse);
    println!("{} RMSE: {:.4}", neural.name, neural.metrics.rmse);
    println!("✨ {} performs better on this dataset!", comparison.winner().name);
}
