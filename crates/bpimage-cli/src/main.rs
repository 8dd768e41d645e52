use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use bpimage::io::functional as F;

mod args;
mod error;
mod ops;

use args::Args;
use error::CliError;
use ops::Operation;

/// The output path used when none is given: `<stem>_<command>.<ext>` next to the source.
fn default_output(source: &Path, operation: &Operation) -> Result<PathBuf, CliError> {
    let (Some(stem), Some(ext)) = (source.file_stem(), source.extension()) else {
        return Err(CliError::OutputPath(source.to_path_buf()));
    };

    let mut name = stem.to_os_string();
    name.push(format!("_{}.", operation.name()));
    name.push(ext);

    Ok(source.with_file_name(name))
}

/// Apply the requested operation and report the written file to `out`.
///
/// Domain failures come back as [`CliError`], anything else is unexpected.
fn run(args: Args, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let operation = Operation::from(args.command);
    let output = match args.output {
        Some(output) => output,
        None => default_output(&args.source, &operation)?,
    };

    let src = F::read_image_rgb8(&args.source).map_err(CliError::from)?;

    log::info!("applying {} to {}", operation.name(), args.source.display());
    let dst = operation.apply(&src)?;

    F::write_image(&output, &dst).map_err(CliError::from)?;

    writeln!(out, "saved {}", output.display())?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Args = argh::from_env();

    match run(args, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(err) = err.downcast_ref::<CliError>() {
                eprintln!("error: {err}");
                ExitCode::from(1)
            } else {
                eprintln!("unexpected error: {err}");
                ExitCode::from(2)
            }
        }
    }
}
