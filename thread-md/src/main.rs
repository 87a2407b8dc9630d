use std::process;

use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::config::Config;

mod args;
mod config;
mod progress_bar;

#[tokio::main]
async fn main() {
    // Load .env before parsing so it can supply the bearer token
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run().await {
        Ok(_) => process::exit(0),
        Err(err) => {
            eprintln!("{:#}", err);
            process::exit(1);
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let conf = Config::load(args.config_path())?;
    let settings = args.resolve(conf)?;

    let outfile = settings.run().await?;
    log::info!("Markdown file has been saved to {}!", outfile.display());

    Ok(())
}
