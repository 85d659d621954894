//! Logging and progress bar for folder runs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::folder::{ProcessingEvent, ProcessingObserver};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tallies kept while a folder is processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Files copied
    pub accepted: usize,
    /// Files rejected by the policy
    pub rejected: usize,
    /// Files skipped because decoding or copying failed
    pub failed: usize,
}

/// Logs every processing event through `tracing` and optionally drives a progress bar
///
/// Log lines are printed with the bar suspended so the two never interleave.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    tally: Tally,
}

impl ProgressReporter {
    /// Create a reporter, with a progress bar unless `show_bar` is false
    pub fn new(show_bar: bool) -> Self {
        let bar = show_bar.then(|| {
            let bar = ProgressBar::new(0);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
        Self {
            bar,
            tally: Tally::default(),
        }
    }

    /// Counts accumulated so far
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Whether a progress bar is attached
    pub const fn has_bar(&self) -> bool {
        self.bar.is_some()
    }

    fn log(&self, emit: impl FnOnce()) {
        match &self.bar {
            Some(bar) => bar.suspend(emit),
            None => emit(),
        }
    }

    fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            bar.set_message(format!(
                "kept {} / rejected {} / failed {}",
                self.tally.accepted, self.tally.rejected, self.tally.failed
            ));
        }
    }
}

impl ProcessingObserver for ProgressReporter {
    fn on_event(&mut self, event: ProcessingEvent<'_>) {
        match event {
            ProcessingEvent::Started { total } => {
                if let Some(bar) = &self.bar {
                    bar.set_length(total as u64);
                }
                self.log(|| info!(total, "found candidate images"));
            }
            ProcessingEvent::Processing { path } => {
                self.log(|| info!(path = %path.display(), "processing"));
            }
            ProcessingEvent::Accepted {
                source,
                destination,
            } => {
                self.tally.accepted += 1;
                self.log(|| {
                    info!(
                        source = %source.display(),
                        destination = %destination.display(),
                        "accepted: copied"
                    );
                });
                self.advance();
            }
            ProcessingEvent::Rejected { path, reason } => {
                self.tally.rejected += 1;
                self.log(|| info!(path = %path.display(), %reason, "rejected"));
                self.advance();
            }
            ProcessingEvent::DecodeFailed { path, reason } => {
                self.tally.failed += 1;
                self.log(|| warn!(path = %path.display(), reason, "skipped: could not decode"));
                self.advance();
            }
            ProcessingEvent::CopyFailed {
                path,
                destination,
                reason,
            } => {
                self.tally.failed += 1;
                self.log(|| {
                    warn!(
                        path = %path.display(),
                        destination = %destination.display(),
                        reason,
                        "accepted but copy failed"
                    );
                });
                self.advance();
            }
            ProcessingEvent::Finished => {
                if let Some(bar) = &self.bar {
                    bar.finish_and_clear();
                }
                let tally = self.tally;
                info!(
                    accepted = tally.accepted,
                    rejected = tally.rejected,
                    failed = tally.failed,
                    "all files processed"
                );
            }
        }
    }
}
