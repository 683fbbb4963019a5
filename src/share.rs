//! Best-effort share action: copy the calculator link to the clipboard.
//!
//! Clipboard access is a platform call that can fail for any number of
//! reasons (permissions, headless environment). It must never fail hard:
//! when the copy does not land, presentation shows the raw link instead.
//! The engine never consumes any of this.

use tracing::warn;

/// Seam for the platform clipboard call. Presentation supplies the real
/// implementation; tests supply stubs.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ShareError>;
}

/// Why a copy attempt failed. Carried only into the fallback path and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareError {
    pub reason: String,
}

impl std::fmt::Display for ShareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "clipboard copy failed: {}", self.reason)
    }
}

impl std::error::Error for ShareError {}

/// Outcome of a share attempt, consumed only by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The link landed on the clipboard.
    Copied,
    /// Copy failed; show this raw link to the user instead.
    Fallback(String),
}

/// Try to copy `link`; degrade to surfacing the raw link on failure.
pub fn share_link(clipboard: &dyn Clipboard, link: &str) -> ShareOutcome {
    match clipboard.copy(link) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "share copy failed, falling back to raw link");
            ShareOutcome::Fallback(link.to_string())
        }
    }
}
