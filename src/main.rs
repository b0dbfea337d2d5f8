#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod history;
mod prelude;
mod quantity;

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    Args::parse().run().await;

    info!("done!");
}
