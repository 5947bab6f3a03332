//! Command-line interface for regenerating and viewing terrain maps

use crate::classify::voter::{SampleWindow, SamplingMode};
use crate::extract::batch::{BatchOptions, regenerate_all};
use crate::io::configuration::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SIZE, DEFAULT_SURFACE_HEIGHT,
    DEFAULT_SURFACE_WIDTH, MAP_EXTENSION,
};
use crate::io::error::Result;
use crate::io::manifest::Manifest;
use crate::io::progress::ProgressManager;
use crate::render::colors::SymbolColors;
use crate::render::viewer::{MapViewer, SurfaceSize, ViewOutcome};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "terramap")]
#[command(
    author,
    version,
    about = "Convert raster map images into terrain character grids"
)]
/// Command-line arguments for the map tool
pub struct Cli {
    /// Action to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available actions
#[derive(Subcommand)]
pub enum Command {
    /// Regenerate every map listed in the manifest
    #[command(alias = "regenerate")]
    Extract {
        /// Folder holding the raw map images
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,

        /// Folder receiving the generated maps
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// TOML manifest of maps (built-in list when omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Side length of the voting window (odd)
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample_size: usize,

        /// Classify only the center pixel of each tile
        #[arg(short, long)]
        center_pixel: bool,
    },

    /// Render one generated map to a PNG image
    View {
        /// Map name, with or without the .txt extension
        #[arg(value_name = "NAME")]
        name: String,

        /// Folder holding the generated maps
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Surface width in pixels
        #[arg(short = 'W', long, default_value_t = DEFAULT_SURFACE_WIDTH)]
        width: u32,

        /// Surface height in pixels
        #[arg(short = 'H', long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
        height: u32,

        /// Destination image (defaults to the map path with a .png extension)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// List the maps a regeneration run would produce
    List {
        /// TOML manifest of maps (built-in list when omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Dispatches a parsed command line
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the input folder is
    /// missing, or a map cannot be rendered
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Extract {
                input_dir,
                output_dir,
                manifest,
                sample_size,
                center_pixel,
            } => {
                let manifest = load_manifest(manifest.as_deref())?;
                let mode = if *center_pixel {
                    SamplingMode::CenterPixel
                } else {
                    SamplingMode::Vote(SampleWindow::new(*sample_size)?)
                };
                let options = BatchOptions {
                    input_dir: input_dir.clone(),
                    output_dir: output_dir.clone(),
                    mode,
                };
                let mut progress = self.cli.should_show_progress().then(ProgressManager::new);
                regenerate_all(&manifest, &options, progress.as_mut())?;
                Ok(())
            }
            Command::View {
                name,
                output_dir,
                width,
                height,
                image,
            } => {
                let surface = SurfaceSize::new(*width, *height)?;
                let viewer =
                    MapViewer::new(output_dir.clone(), surface, SymbolColors::default());
                let file_name = map_file_name(name);
                let image_path = image
                    .clone()
                    .unwrap_or_else(|| viewer.default_image_path(&file_name));
                Self::report_view(&viewer.view(&file_name, &image_path)?);
                Ok(())
            }
            Command::List { manifest } => {
                let manifest = load_manifest(manifest.as_deref())?;
                Self::print_jobs(&manifest);
                Ok(())
            }
        }
    }

    // Allow print for user feedback when a map has not been generated yet
    #[allow(clippy::print_stderr)]
    fn report_view(outcome: &ViewOutcome) {
        match outcome {
            ViewOutcome::Rendered {
                image_path,
                rows,
                cols,
                ..
            } => {
                log::info!(
                    "Rendered {rows}x{cols} map to '{}'",
                    image_path.display()
                );
            }
            ViewOutcome::NotFound { map_path } => {
                eprintln!(
                    "Map '{}' not found. Run `terramap extract` to generate it.",
                    map_path.display()
                );
            }
        }
    }

    // Listing is the command's output
    #[allow(clippy::print_stdout)]
    fn print_jobs(manifest: &Manifest) {
        for job in manifest.jobs() {
            println!(
                "{} -> {} ({}x{}, {}, tolerance {})",
                job.image.display(),
                job.output.display(),
                job.dimensions.rows(),
                job.dimensions.cols(),
                job.palette.name(),
                job.tolerance.value()
            );
        }
    }
}

fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    path.map_or_else(Manifest::builtin, Manifest::load)
}

/// Append the map extension when `name` has none
pub fn map_file_name(name: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{name}.{MAP_EXTENSION}")
    }
}
