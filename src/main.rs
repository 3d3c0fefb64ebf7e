//! quantumnexus CLI entry point
//!
//! Parses `--verbose`, runs the application, exits non-zero on failure.

use quantumnexus::{cli, Error};

fn main() {
    match cli::run() {
        Ok(()) => {}
        // clap prints usage, help or version and picks the exit status
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
