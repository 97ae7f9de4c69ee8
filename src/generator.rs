//! The document generator: config, font registration, the per-page loop, and
//! finalization.
//!
//! Generation is strictly linear: validate → load font → draw pages →
//! serialize → publish. The serialized bytes go to a sibling `.tmp` path and
//! are renamed onto the destination, so a failed run never leaves a partial
//! document at the output path.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use printpdf::font::ParsedFont;
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::error::GenerationError;
use crate::fonts::FontAsset;
use crate::plan::{plan_document, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::render::page_ops;

const PT_TO_MM: f32 = 0.352778;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Destination file (default: `book.pdf`).
    pub output_path: PathBuf,
    /// Number of pages to generate (default: 200, must be at least 1).
    pub page_count: u32,
    /// TTF/OTF used for all text and the marker glyph.
    pub font_path: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("book.pdf"),
            page_count: 200,
            font_path: PathBuf::from("fonts/LiberationSans-Regular.ttf"),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub pages: u32,
    pub bytes_written: usize,
}

/// Generate the proof-sheet document described by `config` and write it to
/// `config.output_path`.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary, GenerationError> {
    if config.page_count == 0 {
        return Err(GenerationError::InvalidPageCount(0));
    }

    let font = FontAsset::load(&config.font_path)?;
    log::info!(
        "generating {} pages into '{}'",
        config.page_count,
        config.output_path.display()
    );

    let bytes = generate_to_bytes(config.page_count, &font)?;
    publish(&config.output_path, &bytes)?;

    log::info!(
        "wrote '{}' ({} bytes, {} pages)",
        config.output_path.display(),
        bytes.len(),
        config.page_count
    );
    Ok(GenerationSummary {
        pages: config.page_count,
        bytes_written: bytes.len(),
    })
}

/// Run the drawing pipeline without touching the filesystem.
///
/// The font must carry real bytes (a heuristic-only [`FontAsset`] cannot be
/// embedded).
pub fn generate_to_bytes(
    page_count: u32,
    font: &FontAsset,
) -> Result<Vec<u8>, GenerationError> {
    if page_count == 0 {
        return Err(GenerationError::InvalidPageCount(0));
    }

    let font_bytes = font.bytes().ok_or_else(|| GenerationError::FontLoad {
        path: PathBuf::from("<in-memory>"),
        reason: "font asset has no embeddable bytes".to_string(),
    })?;
    let mut warnings = Vec::new();
    let parsed =
        ParsedFont::from_bytes(font_bytes, 0, &mut warnings).ok_or_else(|| {
            GenerationError::FontLoad {
                path: PathBuf::from("<in-memory>"),
                reason: "printpdf could not parse the font for embedding".to_string(),
            }
        })?;

    let mut doc = PdfDocument::new("pageproof proof sheet");
    let font_id = doc.add_font(&parsed);

    let page_w = Mm(PAGE_WIDTH_PT * PT_TO_MM);
    let page_h = Mm(PAGE_HEIGHT_PT * PT_TO_MM);

    let mut pages = Vec::with_capacity(page_count as usize);
    for plan in plan_document(page_count) {
        log::debug!("drawing page {}", plan.index);
        // Each page starts from an empty op list; nothing carries over.
        let ops = page_ops(&plan, &font_id, font)?;
        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pages);
    Ok(doc.save(&PdfSaveOptions::default(), &mut Vec::new()))
}

/// Write `bytes` next to `path` and atomically rename into place.
///
/// Both failure branches discard the temp file, so an aborted run leaves no
/// artifact at either path.
fn publish(path: &Path, bytes: &[u8]) -> Result<(), GenerationError> {
    let tmp = temp_path(path);
    fs::write(&tmp, bytes).map_err(|e| {
        discard_temp(&tmp);
        GenerationError::Save {
            path: tmp.clone(),
            source: e,
        }
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        discard_temp(&tmp);
        GenerationError::Save {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

/// Best-effort removal of a (possibly partial) temp file.
fn discard_temp(tmp: &Path) {
    if !tmp.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(tmp) {
        log::warn!("could not remove temp file '{}': {e}", tmp.display());
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pages_rejected_before_any_io() {
        let config = GeneratorConfig {
            output_path: PathBuf::from("/nonexistent-dir/out.pdf"),
            page_count: 0,
            font_path: PathBuf::from("/nonexistent-dir/font.ttf"),
        };
        // Fails on validation, not on the bogus paths.
        match generate(&config) {
            Err(GenerationError::InvalidPageCount(0)) => {}
            other => panic!("expected InvalidPageCount, got {other:?}"),
        }
    }

    #[test]
    fn zero_pages_rejected_in_byte_pipeline() {
        let font = FontAsset::with_heuristic_metrics();
        match generate_to_bytes(0, &font) {
            Err(GenerationError::InvalidPageCount(0)) => {}
            other => panic!("expected InvalidPageCount, got {other:?}"),
        }
    }

    #[test]
    fn heuristic_font_cannot_be_embedded() {
        let font = FontAsset::with_heuristic_metrics();
        match generate_to_bytes(1, &font) {
            Err(GenerationError::FontLoad { reason, .. }) => {
                assert!(reason.contains("embeddable"), "reason: {reason}")
            }
            other => panic!("expected FontLoad, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_documented_contract() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_path, PathBuf::from("book.pdf"));
        assert_eq!(config.page_count, 200);
        assert_eq!(
            config.font_path,
            PathBuf::from("fonts/LiberationSans-Regular.ttf")
        );
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path(Path::new("/some/dir/book.pdf"));
        assert_eq!(tmp, PathBuf::from("/some/dir/book.pdf.tmp"));
    }

    #[test]
    fn failed_temp_write_reports_save_and_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-subdir").join("book.pdf");

        match publish(&target, b"%PDF-fake") {
            Err(GenerationError::Save { path, .. }) => assert_eq!(path, temp_path(&target)),
            other => panic!("expected Save, got {other:?}"),
        }
        assert!(!target.exists());
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn failed_rename_discards_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination makes the rename fail after the
        // temp write succeeded.
        let target = dir.path().join("book.pdf");
        fs::create_dir(&target).unwrap();

        match publish(&target, b"%PDF-fake") {
            Err(GenerationError::Save { path, .. }) => assert_eq!(path, target),
            other => panic!("expected Save, got {other:?}"),
        }
        assert!(!temp_path(&target).exists(), "temp file must be discarded");
    }
}
