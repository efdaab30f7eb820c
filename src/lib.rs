extern crate parser;
extern crate logger;

use std::path::Path;

use anyhow::Result;
use genotype_matrix::{reduce, MissingColumnPolicy};
use located_error::LocatedError;
use parser::{Cli, MissingColumn};
use pca_plot::{scatter_plot, PlotConfig};
use ped_io::decode_ped;

#[macro_use]
extern crate log;

/// Verbosity level of the logger, as requested by the command line.
#[must_use]
pub fn verbosity(cli: &Cli) -> u8 {
    if cli.quiet {0} else {cli.verbose.saturating_add(1)}
}

#[must_use]
pub fn missing_column_policy(missing_column: MissingColumn) -> MissingColumnPolicy {
    match missing_column {
        MissingColumn::Fail   => MissingColumnPolicy::Fail,
        MissingColumn::Drop   => MissingColumnPolicy::Drop,
        MissingColumn::HomRef => MissingColumnPolicy::HomRef,
    }
}

/// Decode a PED file, project its samples on their first two principal components, and plot cases against controls.
///
/// # Errors
/// - if `--from-yaml` was requested, and the `.yaml` file cannot be deserialized.
/// - if the output plot already exists and `--overwrite` was not requested, or if its directory does not exist.
/// - `PedError` if the PED file is missing, or malformed.
/// - `ImputationError` if a genotype column is missing for every sample (see `--missing-column`)
/// - `PcaError` if the cohort is too small to compute two principal components.
/// - if the scatter plot cannot be written.
pub fn run(cli: Cli) -> Result<()> {
    // ----------------------------- Replay arguments from a previous run, if requested.
    let replayed = cli.from_yaml.is_some();
    let cli = cli.resolve()?;
    if replayed {
        logger::Logger::set_level(verbosity(&cli));
    }

    // ----------------------------- Check output files.
    let ped = cli.ped()?;
    let output = cli.output.clone().unwrap_or_else(|| pca_plot::default_output(ped));
    cli.can_write_file(&output)?;

    // ----------------------------- Decode genotypes.
    info!("Decoding {}...", ped.display());
    let dataset = decode_ped(ped)
        .with_loc(|| format!("While decoding {}", ped.display()))?;
    info!("Found {} samples ({} cases, {} controls) x {} variants.",
        dataset.n_samples(), dataset.cases(), dataset.controls(), dataset.n_variants()
    );

    // ----------------------------- Impute and project.
    info!("All-missing genotype column policy: {}", cli.missing_column);
    let projection = reduce(dataset, missing_column_policy(cli.missing_column))?;

    // ----------------------------- Serialize arguments of a successful run.
    let output_dir = match output.parent() {
        Some(dir) if ! dir.as_os_str().is_empty() => dir,
        _                                         => Path::new("."),
    };
    if ! replayed {
        if let Some(yaml) = cli.serialize(output_dir)? {
            info!("Command line arguments serialized into {}", yaml.display());
        }
    }

    // ----------------------------- Plot.
    scatter_plot(&projection, &output, &PlotConfig::default())?;
    Ok(())
}
