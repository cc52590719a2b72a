use tracing::{debug, info};

use imgclip::core::params::DEFAULT_JPEG_QUALITY;
use imgclip::io::default_output_path;
use imgclip::{ClipParams, batch_timestamp, clip_file_to_path, clip_files_to_dir};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge flags over an optional preset. Flags win.
fn resolve_params(args: &CliArgs) -> Result<ClipParams, AppError> {
    let preset = args
        .preset
        .as_deref()
        .map(ClipParams::from_json_file)
        .transpose()?;

    if let Some(path) = &args.preset {
        debug!("Loaded preset {:?}: {:?}", path, preset);
    }

    let target = args
        .target
        .or(preset.as_ref().map(|p| p.target))
        .ok_or(AppError::MissingArgument {
            arg: "--target".to_string(),
        })?;

    Ok(ClipParams {
        target,
        policy: args
            .policy
            .or(preset.as_ref().map(|p| p.policy))
            .unwrap_or_default(),
        jpeg_quality: args
            .quality
            .or(preset.as_ref().map(|p| p.jpeg_quality))
            .unwrap_or(DEFAULT_JPEG_QUALITY),
    })
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    let params = resolve_params(&args)?;
    info!("Target: {} (policy: {})", params.target, params.policy);

    // One timestamp for every default name written by this run
    let timestamp = batch_timestamp();

    if args.inputs.len() > 1 && args.output.is_some() {
        return Err(AppError::OutputWithBatch {
            count: args.inputs.len(),
        });
    }

    if let [input] = args.inputs.as_slice() {
        let output = match &args.output {
            Some(path) => path.clone(),
            None => default_output_path(&args.output_dir, params.target, &timestamp),
        };

        let report = clip_file_to_path(input, &output, &params)?;
        println!("{report}");
        info!("Successfully processed: {:?} -> {:?}", input, output);
        return Ok(());
    }

    info!("Starting batch of {} inputs", args.inputs.len());
    info!("Output directory: {:?}", args.output_dir);

    let report = clip_files_to_dir(
        &args.inputs,
        &args.output_dir,
        &params,
        &timestamp,
        !args.fail_fast,
    )?;

    for clip in &report.reports {
        println!("{clip}\n");
    }

    if report.errors > 0 {
        return Err(AppError::BatchFailed {
            failed: report.errors,
            total: report.total(),
        });
    }

    Ok(())
}
