use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, Level};

use mtx_sort::algorithm::{compute_order, SortMethod};
use mtx_sort::io::{export, import};

/// Sort the rows of a Matrix Market coordinate file.
#[derive(Parser)]
#[command(name = "mtx-sort", version, about)]
struct Opts {
    /// Input .mtx file
    input: PathBuf,

    /// Output .mtx file
    output: PathBuf,

    /// Sorting method: index (default), nnz (non-zero count), rowsum
    #[arg(long, default_value = "index", value_parser = SortMethod::from_str)]
    method: SortMethod,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_max_level(if opts.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let matrix = import(&opts.input)
        .with_context(|| format!("Couldn't load the matrix from \"{}\".", opts.input.display()))?;
    info!(
        "Loaded matrix: {} x {}, nnz = {}",
        matrix.nr_rows(), matrix.nr_columns(), matrix.nnz()
    );

    let permutation = compute_order(&matrix, opts.method);
    debug!(method = %opts.method, identity = permutation.is_identity(), "Computed row order");
    let sorted = matrix.permute_rows(&permutation);

    export(&sorted, &opts.output)
        .with_context(|| format!("Couldn't save the sorted matrix to \"{}\".", opts.output.display()))?;
    info!("Saved sorted matrix to {}", opts.output.display());

    Ok(())
}
