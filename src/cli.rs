use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scrape-software-versions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect pipeline tool versions into a MultiQC report")]
#[command(long_about = "Reads v_pipeline.txt, v_nextflow.txt and v_featurecounts.txt from the current directory and prints a MultiQC custom-content YAML section listing each tool's version. Tools whose version cannot be determined are shown as N/A.")]
pub struct Cli {
    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
