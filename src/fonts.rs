//! Font asset loading and text measurement using `ttf-parser`.
//!
//! The generator loads exactly one font, up front, into a [`FontAsset`]. The
//! asset keeps the raw bytes alive (printpdf embeds them at save time) plus
//! the metrics needed to center strings: glyph advances scaled by
//! `units_per_em`. The face is parsed once at load time; advances and
//! coverage for the glyphs the generator draws (digits and the marker
//! candidates) are cached so per-page measurement never re-parses the font.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::GenerationError;
use crate::plan::MARKER_GLYPHS;

/// Every character the generator can ask to draw: decimal digits plus the
/// marker candidates. Advances for these are cached at load time.
fn drawn_charset() -> impl Iterator<Item = char> {
    ('0'..='9').chain(MARKER_GLYPHS)
}

/// A loaded font: raw bytes plus cached scalar metrics.
///
/// Created once per run via [`FontAsset::load`] and shared read-only by all
/// drawing calls. An asset with empty `bytes` (see
/// [`FontAsset::with_heuristic_metrics`]) measures with an average-width
/// heuristic and claims full glyph coverage; it cannot be embedded in a
/// document and exists for measurement-only callers.
#[derive(Clone)]
pub struct FontAsset {
    /// Raw font bytes (kept alive for PDF embedding).
    bytes: Vec<u8>,
    units_per_em: f32,
    /// Advance in font units per cached char; `None` means the font has no
    /// glyph for it.
    advances: HashMap<char, Option<f32>>,
}

impl fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontAsset")
            .field("byte_len", &self.bytes.len())
            .field("units_per_em", &self.units_per_em)
            .field("cached_glyphs", &self.advances.len())
            .finish()
    }
}

impl FontAsset {
    /// Read and parse a TTF/OTF file.
    ///
    /// Fails with [`GenerationError::FontLoad`] if the file is missing,
    /// unreadable, or not a parseable font.
    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let bytes = fs::read(path).map_err(|e| GenerationError::FontLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(bytes).map_err(|reason| GenerationError::FontLoad {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse a font from bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, String> {
        let face = ttf_parser::Face::parse(&bytes, 0)
            .map_err(|e| format!("failed to parse font: {e}"))?;
        let units_per_em = face.units_per_em() as f32;

        let advances = drawn_charset()
            .map(|ch| {
                let advance = face
                    .glyph_index(ch)
                    .map(|gid| face.glyph_hor_advance(gid).unwrap_or(0) as f32);
                (ch, advance)
            })
            .collect();

        Ok(Self {
            bytes,
            units_per_em,
            advances,
        })
    }

    /// Synthetic Helvetica-like metrics with no backing bytes. Measurement
    /// uses the average-width heuristic and [`covers`](Self::covers) reports
    /// every glyph as present.
    pub fn with_heuristic_metrics() -> Self {
        Self {
            bytes: Vec::new(),
            units_per_em: 1000.0,
            advances: HashMap::new(),
        }
    }

    /// Raw bytes for embedding in the PDF. `None` for heuristic assets.
    pub fn bytes(&self) -> Option<&[u8]> {
        if self.bytes.is_empty() {
            None
        } else {
            Some(&self.bytes)
        }
    }

    /// Whether the font has a glyph for `ch`.
    ///
    /// Cached chars answer from the load-time map; anything else falls back
    /// to a one-off parse of the face (the generator itself only ever asks
    /// about cached chars).
    pub fn covers(&self, ch: char) -> bool {
        if self.bytes.is_empty() {
            return true;
        }
        match self.advances.get(&ch) {
            Some(advance) => advance.is_some(),
            None => match ttf_parser::Face::parse(&self.bytes, 0) {
                Ok(face) => face.glyph_index(ch).is_some(),
                Err(_) => false,
            },
        }
    }

    /// First char of `candidates` the font covers.
    pub fn first_covered(&self, candidates: &[char]) -> Option<char> {
        candidates.iter().copied().find(|&c| self.covers(c))
    }

    /// Measure the advance width of `text` at `font_size` points.
    ///
    /// Sums cached horizontal glyph advances scaled to the em size.
    /// Characters without a glyph (or outside the cached charset) fall back
    /// to 0.5 × font_size, as does the whole measurement when no real font
    /// bytes are present.
    pub fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        if self.bytes.is_empty() {
            return text.chars().count() as f32 * font_size * 0.5;
        }

        let scale = font_size / self.units_per_em;
        text.chars()
            .map(|ch| match self.advances.get(&ch) {
                Some(Some(advance)) => advance * scale,
                _ => font_size * 0.5,
            })
            .sum()
    }
}
