use std::path::PathBuf;

use clap::Parser;

/// Compare two sample distributions as overlapping histograms.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Samples for the first series ("pure"), whitespace separated numbers
    pub pure: PathBuf,

    /// Samples for the second series ("mixed"), whitespace separated numbers
    pub mixed: PathBuf,
}
