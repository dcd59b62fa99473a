use clap::Parser;
use std::io;
use std::path::Path;
use std::process;
use version_scraper::{cli::Cli, handlers};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let stdout = io::stdout();
    if let Err(e) = handlers::handle_report(Path::new("."), stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
