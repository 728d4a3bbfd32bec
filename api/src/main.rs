use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    application::{http::server::http_server::serve, simulate::simulate},
    args::{Args, Command, LogArgs},
};

mod application;
mod args;

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    match args.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => serve(args).await,
        Command::Simulate(simulate_args) => simulate(args, simulate_args).await,
    }
}
