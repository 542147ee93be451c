//! Download detail screen model.

use crate::source::DownloadSource;

/// How a download ended, as reported by the download coprocessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outcome {
    pub source: DownloadSource,
    pub success: bool,
}

/// What the detail screen shows for one [`Outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailView {
    outcome: Outcome,
}

impl DetailView {
    pub const fn new(outcome: Outcome) -> Self {
        Self { outcome }
    }

    pub fn file_name(&self) -> &'static str {
        self.outcome.source.title()
    }

    pub fn status(&self) -> &'static str {
        if self.outcome.success {
            "Success"
        } else {
            "Fail"
        }
    }

    /// Failed downloads get their status drawn with emphasis.
    pub fn failed(&self) -> bool {
        !self.outcome.success
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
