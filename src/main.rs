// src/main.rs
use anyhow::Result;
use clap::Parser;

use wfc::{Args, logging, run};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    run(args)
}
