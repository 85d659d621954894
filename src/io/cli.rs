//! Command-line interface for filtering an image folder into a destination folder

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::io::configuration::{
    DEFAULT_LEFT_BAND_FRACTION, DEFAULT_RIGHT_BAND_START, DEFAULT_TOP_STRIP_FRACTION,
    DEFAULT_VERTICAL_BAND_FRACTION, DEFAULT_WHITE_THRESHOLD, PolicyConfig,
};
use crate::io::error::{Result, file_system};
use crate::io::folder::{FolderProcessor, FolderReport};
use crate::io::progress::ProgressReporter;
use crate::policy::acceptance::AcceptancePolicy;

#[derive(Parser, Debug)]
#[command(name = "whiteband")]
#[command(
    author,
    version,
    about = "Copy images with white side bands and a clean top edge into a new folder"
)]
/// Command-line arguments for the folder filter
pub struct Cli {
    /// Folder containing .jpg, .jpeg or .png images
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Folder receiving accepted images (created if missing)
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Minimum value of each color channel for a pixel to count as white
    #[arg(short = 't', long, default_value_t = DEFAULT_WHITE_THRESHOLD)]
    pub white_threshold: u8,

    /// Fraction of the image height scanned for non-white pixels at the top
    #[arg(long, default_value_t = DEFAULT_TOP_STRIP_FRACTION)]
    pub top_strip_fraction: f64,

    /// Width of the left band as a fraction of the image width
    #[arg(long, default_value_t = DEFAULT_LEFT_BAND_FRACTION)]
    pub left_band_fraction: f64,

    /// Start of the right band as a fraction of the image width
    #[arg(long, default_value_t = DEFAULT_RIGHT_BAND_START)]
    pub right_band_start: f64,

    /// Height of both bands as a fraction of the image height
    #[arg(long, default_value_t = DEFAULT_VERTICAL_BAND_FRACTION)]
    pub vertical_band_fraction: f64,

    /// Suppress the progress bar and per-file messages
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log band colors and contamination details for every file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Policy parameters gathered from the flags
    pub const fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            white_threshold: self.white_threshold,
            top_strip_fraction: self.top_strip_fraction,
            left_band_fraction: self.left_band_fraction,
            right_band_start: self.right_band_start,
            vertical_band_fraction: self.vertical_band_fraction,
        }
    }

    /// Maximum level the log subscriber should emit
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            Level::WARN
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Check if the progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the policy, prepare the destination and process the source folder
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A policy parameter is out of range
    /// - The destination folder cannot be created
    /// - The source folder cannot be listed
    pub fn run(&self) -> Result<FolderReport> {
        let policy = AcceptancePolicy::new(self.policy_config())?;

        std::fs::create_dir_all(&self.destination)
            .map_err(|e| file_system(&self.destination, "create directory", e))?;

        let mut reporter = ProgressReporter::new(self.should_show_progress());
        FolderProcessor::new(policy).process(&self.source, &self.destination, &mut reporter)
    }
}
