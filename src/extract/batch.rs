//! Regeneration of every map listed in a manifest
//!
//! A missing input folder aborts the run before any map is touched. A missing
//! image only skips its own job; decoding or write failures are recorded per
//! job and the remaining jobs still run.

use crate::classify::voter::SamplingMode;
use crate::extract::driver::{ExtractionSettings, extract_image_file};
use crate::io::error::{MapError, Result, file_system};
use crate::io::manifest::{Manifest, MapJob};
use crate::io::progress::ProgressManager;
use std::path::{Path, PathBuf};

/// What happened to one job
#[derive(Debug)]
pub enum MapOutcome {
    /// The artifact was written
    Written {
        /// Artifact location
        path: PathBuf,
        /// Rows in the written map
        rows: usize,
        /// Columns in the written map
        cols: usize,
    },
    /// The source image does not exist
    Skipped {
        /// Image that was looked for
        image: PathBuf,
    },
    /// The image could not be converted or the artifact not written
    Failed {
        /// Cause of the failure
        error: MapError,
    },
}

/// Per-job results of a regeneration run, in manifest order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per job
    pub outcomes: Vec<MapOutcome>,
}

impl BatchReport {
    /// Number of artifacts written
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, MapOutcome::Written { .. }))
    }

    /// Number of jobs skipped for a missing image
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, MapOutcome::Skipped { .. }))
    }

    /// Number of jobs that failed
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, MapOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&MapOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

/// Folders and sampling shared by every job of a run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Folder holding the source images
    pub input_dir: PathBuf,
    /// Folder receiving the artifacts
    pub output_dir: PathBuf,
    /// Per-tile sampling strategy
    pub mode: SamplingMode,
}

/// Run every job of `manifest`
///
/// # Errors
///
/// Returns an error if:
/// - The input folder does not exist
/// - The output folder cannot be created
pub fn regenerate_all(
    manifest: &Manifest,
    options: &BatchOptions,
    mut progress: Option<&mut ProgressManager>,
) -> Result<BatchReport> {
    if !options.input_dir.is_dir() {
        return Err(MapError::MissingInputFolder {
            path: options.input_dir.clone(),
        });
    }

    if !options.output_dir.is_dir() {
        std::fs::create_dir_all(&options.output_dir)
            .map_err(|e| file_system(&options.output_dir, "create directory", e))?;
        log::info!("Created output folder '{}'", options.output_dir.display());
    }

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(manifest.len());
    }

    let mut report = BatchReport::default();
    for (index, job) in manifest.jobs().iter().enumerate() {
        let outcome = run_job(job, index, options, progress.as_deref_mut());
        report.outcomes.push(outcome);
    }

    if let Some(pm) = progress.as_deref() {
        pm.finish();
    }

    log::info!(
        "Extraction finished: {} written, {} skipped, {} failed",
        report.written(),
        report.skipped(),
        report.failed()
    );
    Ok(report)
}

fn run_job(
    job: &MapJob,
    index: usize,
    options: &BatchOptions,
    mut progress: Option<&mut ProgressManager>,
) -> MapOutcome {
    let image_path = options.input_dir.join(&job.image);
    let output_path = options.output_dir.join(&job.output);

    if !image_path.is_file() {
        log::warn!(
            "Image '{}' not found, skipping '{}'",
            image_path.display(),
            job.output.display()
        );
        if let Some(pm) = progress.as_deref_mut() {
            pm.start_map(index, &display_name(&job.output), job.dimensions.rows());
            pm.abandon_map(index);
        }
        return MapOutcome::Skipped { image: image_path };
    }

    if let Some(pm) = progress.as_deref_mut() {
        pm.start_map(index, &display_name(&job.output), job.dimensions.rows());
    }

    let settings = ExtractionSettings {
        dimensions: job.dimensions,
        palette: job.palette.palette(),
        tolerance: job.tolerance,
        mode: options.mode,
    };

    let result = extract_image_file(&image_path, &output_path, settings, |rows_done| {
        if let Some(pm) = progress.as_deref_mut() {
            pm.update_rows(index, rows_done);
        }
    });

    match result {
        Ok(map) => {
            log::info!("Map '{}' extracted", output_path.display());
            if let Some(pm) = progress.as_deref_mut() {
                pm.complete_map(index);
            }
            MapOutcome::Written {
                path: output_path,
                rows: map.rows(),
                cols: map.cols(),
            }
        }
        Err(error) => {
            log::warn!("Map '{}' failed: {error}", output_path.display());
            if let Some(pm) = progress.as_deref_mut() {
                pm.abandon_map(index);
            }
            MapOutcome::Failed { error }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
