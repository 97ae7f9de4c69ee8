//! # pageproof – proof-sheet PDF generator
//!
//! Generates a multi-page PDF for visually testing a printing pipeline. Each
//! page shows its page number twice – once upright near the top, once rotated
//! 90° counter-clockwise at the left – plus a large upward marker at the
//! center. The stages are:
//!
//! 1. **Plan** – describe each page's placements in pure data ([`plan`])
//! 2. **Render** – turn plans into printpdf ops ([`render`])
//! 3. **Generate** – load the font, commit pages, publish the file
//!    ([`generator`])

pub mod error;
pub mod fonts;
pub mod generator;
pub mod plan;
pub mod render;

// Re-exports for convenience
pub use error::GenerationError;
pub use fonts::FontAsset;
pub use generator::{generate, generate_to_bytes, GenerationSummary, GeneratorConfig};
