// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use jma_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().wrap_err("jma_scrape failed")
}
