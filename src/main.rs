use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use row_truncator::ingestion::{
    StdErrObserver, TruncateOptions, TruncateRequest, TruncationObserver, WriteMode, DEFAULT_DELIMITER,
    DEFAULT_DESTINATION, DEFAULT_MAX_FIELDS, DEFAULT_SOURCE,
};
use row_truncator::TruncateError;

#[derive(Parser, Debug)]
#[command(name = "row-truncator", version, about = "Keep the first N fields of every line of a delimited file")]
struct Cli {
    /// Input file
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// Output file (created or overwritten)
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    destination: PathBuf,
    /// Field delimiter
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,
    /// Maximum number of leading fields kept per line
    #[arg(long, default_value_t = DEFAULT_MAX_FIELDS)]
    max_fields: usize,
    /// Transform line by line instead of reading the whole file first
    #[arg(long)]
    streaming: bool,
    /// Print a run summary (rows, truncated, short) to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), TruncateError> {
    let cli = Cli::parse();

    let observer: Option<Arc<dyn TruncationObserver>> = if cli.verbose {
        Some(Arc::new(StdErrObserver))
    } else {
        None
    };

    let request = TruncateRequest {
        source: cli.source,
        destination: cli.destination,
        options: TruncateOptions {
            delimiter: cli.delimiter,
            max_fields: cli.max_fields,
            mode: if cli.streaming { WriteMode::Streaming } else { WriteMode::Buffered },
            observer,
        },
    };

    request.run()?;
    println!("{}", request.completion_message());
    Ok(())
}
