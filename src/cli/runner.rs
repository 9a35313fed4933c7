use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use s1prepare::{PrepareParams, prepare_and_write};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn load_params(args: &CliArgs) -> Result<PrepareParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            PrepareParams::from_file(path)?
        }
        None => PrepareParams::default(),
    };
    if let Some(format) = args.format {
        params.format = format;
    }
    if args.center_dt {
        params.center_dt = true;
    }
    params.validate()?;
    Ok(params)
}

/// Dataset directories must exist and be readable and writable
fn check_dataset(path: &Path) -> Result<(), AppError> {
    let invalid = |reason| AppError::InvalidDataset {
        path: path.to_path_buf(),
        reason,
    };
    if !path.exists() {
        return Err(invalid("does not exist"));
    }
    if !path.is_dir() {
        return Err(invalid("is not a directory"));
    }
    if fs::read_dir(path).is_err() {
        return Err(invalid("is not readable"));
    }
    // Scratch file is removed again on drop
    if tempfile::Builder::new()
        .prefix(".s1prepare-")
        .tempfile_in(path)
        .is_err()
    {
        return Err(invalid("is not writable"));
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose)?;
    let params = load_params(&args)?;

    for dataset in &args.datasets {
        check_dataset(dataset)?;
    }

    let total = args.datasets.len();
    let mut failed: Vec<&PathBuf> = Vec::new();
    for dataset in &args.datasets {
        match prepare_and_write(dataset, &params) {
            Ok(path) => info!("Wrote {:?}", path),
            Err(e) if args.batch => {
                warn!("Error processing {:?}: {}", dataset, e);
                failed.push(dataset);
            }
            Err(e) => return Err(AppError::Prepare(e).into()),
        }
    }

    if total > 1 {
        info!("Processed: {}", total - failed.len());
        info!("Errors: {}", failed.len());
    }
    if !failed.is_empty() {
        return Err(AppError::BatchFailed {
            failed: failed.len(),
            total,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rejects_missing_and_non_directory_paths() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            check_dataset(&tmp.path().join("absent")),
            Err(AppError::InvalidDataset { reason: "does not exist", .. })
        ));
        assert!(matches!(
            check_dataset(&file),
            Err(AppError::InvalidDataset { reason: "is not a directory", .. })
        ));
        check_dataset(tmp.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn writability_follows_actual_access() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // root can still write into a 0555 directory and must not be refused
        let can_write = fs::write(locked.join("check"), "x").is_ok();
        let _ = fs::remove_file(locked.join("check"));
        let result = check_dataset(&locked);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if can_write {
            result.unwrap();
        } else {
            assert!(matches!(
                result,
                Err(AppError::InvalidDataset { reason: "is not writable", .. })
            ));
        }
        assert_eq!(fs::read_dir(&locked).unwrap().count(), 0);
    }

    #[test]
    fn cli_flags_override_config() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("params.yaml");
        fs::write(&config, "format: json\n").unwrap();

        let args = CliArgs {
            datasets: vec![tmp.path().to_path_buf()],
            format: Some(s1prepare::OutputFormat::Yaml),
            config: Some(config),
            center_dt: true,
            batch: false,
            verbose: false,
        };
        let params = load_params(&args).unwrap();
        assert_eq!(params.format, s1prepare::OutputFormat::Yaml);
        assert!(params.center_dt);
    }
}
