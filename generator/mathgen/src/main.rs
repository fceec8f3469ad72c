//! Mathgen CLI
//!
//! Writes the generated header to the path given as the only argument, or
//! to stdout.

use std::path::PathBuf;

use mathgen::{init_tracing, write_artifact, GenConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: mathgen [output-file]");
        eprintln!();
        eprintln!("Writes the header to output-file, or to stdout when omitted.");
        std::process::exit(1);
    }

    let path = args.get(1).map(PathBuf::from);
    if let Err(err) = write_artifact(&GenConfig::default(), path.as_deref()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
