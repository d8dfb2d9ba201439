// rulesmith/src/main.rs
//! rulesmith entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use rulesmith::cli::Cli;
use rulesmith::{commands, logger};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    commands::run(args)
}
