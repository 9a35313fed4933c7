use clap::Parser;
use std::path::PathBuf;

use s1prepare::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "s1prepare",
    version,
    about = "Prepare SENTINEL_1A SAR dataset for ingestion into the Data Cube."
)]
pub struct CliArgs {
    /// Dataset directories (must exist and be readable and writable)
    #[arg(required = true)]
    pub datasets: Vec<PathBuf>,

    /// Document format written next to the rasters (yaml or json)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Parameter file (YAML, or JSON by .json extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit extent.center_dt (set to the start of the acquisition window)
    #[arg(long, default_value_t = false)]
    pub center_dt: bool,

    /// Batch mode: continue with remaining directories when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_datasets_and_flags() {
        let args = CliArgs::try_parse_from([
            "s1prepare",
            "--format",
            "json",
            "--batch",
            "/data/SENTINEL_1A_a",
            "/data/SENTINEL_1A_b",
        ])
        .unwrap();
        assert_eq!(args.datasets.len(), 2);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.batch);
        assert!(!args.center_dt);
    }

    #[test]
    fn at_least_one_dataset_required() {
        assert!(CliArgs::try_parse_from(["s1prepare"]).is_err());
    }
}
