//! Folder-level orchestration: enumerate candidates, classify, copy accepted files

use std::path::{Path, PathBuf};

use crate::io::error::{Result, file_system};
use crate::io::image::{has_supported_extension, load_grid};
use crate::policy::acceptance::{AcceptancePolicy, Decision, RejectionReason};

/// Progress and decision notifications emitted while a folder is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingEvent<'a> {
    /// Candidates were enumerated
    Started {
        /// Number of candidate images
        total: usize,
    },
    /// A file is about to be decoded and classified
    Processing {
        /// Source file
        path: &'a Path,
    },
    /// The file passed the policy and was copied
    Accepted {
        /// Source file
        source: &'a Path,
        /// Copy written into the destination folder
        destination: &'a Path,
    },
    /// The file failed the policy
    Rejected {
        /// Source file
        path: &'a Path,
        /// Failed check
        reason: RejectionReason,
    },
    /// The file could not be decoded and was skipped
    DecodeFailed {
        /// Source file
        path: &'a Path,
        /// Decoder message
        reason: &'a str,
    },
    /// The file passed the policy but copying it failed
    CopyFailed {
        /// Source file
        path: &'a Path,
        /// Intended copy location
        destination: &'a Path,
        /// I/O message
        reason: &'a str,
    },
    /// Every candidate has been handled
    Finished,
}

/// Receives [`ProcessingEvent`]s in the order they happen
pub trait ProcessingObserver {
    /// Handle one event
    fn on_event(&mut self, event: ProcessingEvent<'_>);
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ProcessingObserver for SilentObserver {
    fn on_event(&mut self, _event: ProcessingEvent<'_>) {}
}

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Passed the policy and copied
    Accepted {
        /// Copy written into the destination folder
        destination: PathBuf,
    },
    /// Failed the policy, nothing copied
    Rejected(RejectionReason),
    /// Could not be decoded, never classified
    DecodeFailed {
        /// Decoder message
        reason: String,
    },
    /// Passed the policy but the copy did not complete
    CopyFailed {
        /// Intended copy location
        destination: PathBuf,
        /// I/O message
        reason: String,
    },
}

/// Per-file outcomes of one folder run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderReport {
    /// Source path and outcome of each candidate
    pub entries: Vec<(PathBuf, FileOutcome)>,
}

impl FolderReport {
    /// Outcome recorded for `path`, if it was a candidate
    pub fn outcome(&self, path: &Path) -> Option<&FileOutcome> {
        self.entries
            .iter()
            .find(|(source, _)| source == path)
            .map(|(_, outcome)| outcome)
    }

    /// Number of files copied to the destination
    pub fn accepted(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Accepted { .. }))
    }

    /// Number of files rejected by the policy
    pub fn rejected(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Rejected(_)))
    }

    /// Number of files that could not be decoded
    pub fn decode_failures(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::DecodeFailed { .. }))
    }

    /// Number of accepted files whose copy failed
    pub fn copy_failures(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::CopyFailed { .. }))
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Applies an [`AcceptancePolicy`] to every image directly inside a folder
///
/// Files are handled one at a time; each grid is dropped as soon as its
/// decision is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderProcessor {
    policy: AcceptancePolicy,
}

impl FolderProcessor {
    /// Create a processor using `policy`
    pub const fn new(policy: AcceptancePolicy) -> Self {
        Self { policy }
    }

    /// Policy applied to each file
    pub const fn policy(&self) -> &AcceptancePolicy {
        &self.policy
    }

    /// Files directly inside `source_dir` with a supported image extension, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or one of its entries cannot be read
    pub fn candidates(source_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(source_dir)
            .map_err(|e| file_system(source_dir, "read directory", e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| file_system(source_dir, "read directory entry", e))?
                .path();
            if path.is_file() && has_supported_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Classify every candidate in `source_dir` and copy accepted files into `dest_dir`
    ///
    /// Existing files in `dest_dir` with the same name are overwritten.
    /// Decode and copy failures are recorded per file and do not stop the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_dir` cannot be listed, or if a band computed
    /// for an image falls outside its grid
    pub fn process(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        observer: &mut dyn ProcessingObserver,
    ) -> Result<FolderReport> {
        let files = Self::candidates(source_dir)?;
        observer.on_event(ProcessingEvent::Started { total: files.len() });

        let mut report = FolderReport::default();
        for file in files {
            let outcome = self.process_file(&file, dest_dir, observer)?;
            report.entries.push((file, outcome));
        }

        observer.on_event(ProcessingEvent::Finished);
        Ok(report)
    }

    fn process_file(
        &self,
        path: &Path,
        dest_dir: &Path,
        observer: &mut dyn ProcessingObserver,
    ) -> Result<FileOutcome> {
        observer.on_event(ProcessingEvent::Processing { path });

        let grid = match load_grid(path) {
            Ok(grid) => grid,
            Err(error) => {
                let reason = error.to_string();
                observer.on_event(ProcessingEvent::DecodeFailed {
                    path,
                    reason: &reason,
                });
                return Ok(FileOutcome::DecodeFailed { reason });
            }
        };
        let decision = self.policy.evaluate(&grid)?;
        drop(grid);

        let outcome = match decision {
            Decision::Accepted => Self::copy_accepted(path, dest_dir, observer),
            Decision::Rejected(reason) => {
                observer.on_event(ProcessingEvent::Rejected { path, reason });
                FileOutcome::Rejected(reason)
            }
        };
        Ok(outcome)
    }

    /// Copy an accepted file into `dest_dir` under its own name and report the outcome
    ///
    /// Overwrites any existing file of that name. When the destination already
    /// is the source file, nothing is written and the file counts as accepted.
    pub fn copy_accepted(
        path: &Path,
        dest_dir: &Path,
        observer: &mut dyn ProcessingObserver,
    ) -> FileOutcome {
        let Some(name) = path.file_name() else {
            let reason = format!("no file name in '{}'", path.display());
            return Self::copy_failed(path, dest_dir, reason, observer);
        };
        let destination = dest_dir.join(name);

        // Copying a file onto itself would truncate it
        let copied = if is_same_file(path, &destination) {
            Ok(())
        } else {
            std::fs::copy(path, &destination).map(|_| ())
        };

        match copied {
            Ok(()) => {
                observer.on_event(ProcessingEvent::Accepted {
                    source: path,
                    destination: &destination,
                });
                FileOutcome::Accepted { destination }
            }
            Err(error) => {
                let reason = file_system(&destination, "copy", error).to_string();
                Self::copy_failed(path, &destination, reason, observer)
            }
        }
    }

    fn copy_failed(
        path: &Path,
        destination: &Path,
        reason: String,
        observer: &mut dyn ProcessingObserver,
    ) -> FileOutcome {
        observer.on_event(ProcessingEvent::CopyFailed {
            path,
            destination,
            reason: &reason,
        });
        FileOutcome::CopyFailed {
            destination: destination.to_path_buf(),
            reason,
        }
    }
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (
        std::fs::canonicalize(source),
        std::fs::canonicalize(destination),
    ) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}
