use clap::Parser;
use roster_report::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
