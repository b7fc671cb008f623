//! Binary entry point for the Radiotray-NG MPRIS bridge.

use std::process;

use clap::Parser;
use radiotray_ng_mpris::{bridge, cli::Args, tracing_config};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = tracing_config::init(args.verbosity()) {
        eprintln!("failed to initialize logging: {err}");
        process::exit(1);
    }

    if let Err(err) = bridge::run(args).await {
        error!("{err}");
        process::exit(1);
    }
}
