use std::path::PathBuf;

use clap::Parser;

/// Draw the most played cards of an MTGO event as a word cloud.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    /// Where to write the png
    #[clap(short, long, default_value = "decklists.png")]
    pub output: PathBuf,
    /// Also write the card counts and colors as json
    #[clap(long)]
    pub dump: Option<PathBuf>,
    /// Log debug output (RUST_LOG wins when set)
    #[clap(short, long)]
    pub verbose: bool,
    /// Decklists page, defaults to the latest modern event
    pub url: Option<String>,
}
