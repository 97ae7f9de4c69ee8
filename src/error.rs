//! Error taxonomy for the generation pipeline.
//!
//! Every failure aborts the whole run; there are no retries and no
//! partial-success mode. Variants carry enough context (stage, page index,
//! underlying cause) to identify what failed from the CLI message alone.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a proof-sheet document.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The requested page count is zero. A zero-page document is rejected
    /// rather than silently emitted.
    #[error("invalid page count {0}: must be at least 1")]
    InvalidPageCount(u32),

    /// The font asset could not be read or parsed. Raised before any page is
    /// drawn and before any output file exists.
    #[error("failed to load font '{}': {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },

    /// A placement operation failed on a specific page, e.g. the font does
    /// not cover a glyph that must be drawn.
    #[error("page {page}: cannot draw {what}: {reason}")]
    Draw {
        page: u32,
        what: String,
        reason: String,
    },

    /// Finalization failed: the serialized document could not be written to
    /// its destination.
    #[error("failed to save document to '{}'", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
