use clap::Parser;
use std::process;
use toi_ranker::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging before any pipeline work
    if let Err(error) = commands::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {error}");
        process::exit(1);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been printed to stdout
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}
