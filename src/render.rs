//! Turns a [`PagePlan`] into printpdf ops.
//!
//! Ops are plain data; a page is committed by wrapping its op list in a
//! `PdfPage`, so nothing drawn here can leak into the next page. The rotated
//! label is drawn inside a [`FrameScope`], which restores the graphics state
//! on every exit path.

use printpdf::matrix::{CurTransMat, TextMatrix};
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::{FontId, Pt};

use crate::error::GenerationError;
use crate::fonts::FontAsset;
use crate::plan::{PagePlan, TextAnchor, MARKER_GLYPHS};

/// Scoped coordinate frame over an op list.
///
/// Pushing the scope emits `SaveGraphicsState` followed by the translate and
/// rotate matrices; dropping it emits `RestoreGraphicsState`. Because the
/// restore lives in `Drop`, early returns between push and drop still leave
/// the op stream balanced.
pub struct FrameScope<'a> {
    ops: &'a mut Vec<Op>,
}

impl<'a> FrameScope<'a> {
    /// Save the graphics state and move the origin to `(translate_x,
    /// translate_y)`, rotated `rotate_deg` degrees counter-clockwise.
    pub fn push(ops: &'a mut Vec<Op>, translate_x: f32, translate_y: f32, rotate_deg: f32) -> Self {
        ops.push(Op::SaveGraphicsState);
        ops.push(Op::SetTransformationMatrix {
            matrix: CurTransMat::Translate(Pt(translate_x), Pt(translate_y)),
        });
        ops.push(Op::SetTransformationMatrix {
            matrix: CurTransMat::Rotate(rotate_deg),
        });
        Self { ops }
    }

    /// The op list, for drawing inside the frame.
    pub fn ops(&mut self) -> &mut Vec<Op> {
        self.ops
    }
}

impl Drop for FrameScope<'_> {
    fn drop(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }
}

/// Emit one string with its horizontal center at `anchor.x` and its baseline
/// at `anchor.y`, in the current coordinate frame.
pub fn draw_centered_text(
    ops: &mut Vec<Op>,
    text: &str,
    anchor: TextAnchor,
    font_id: &FontId,
    font: &FontAsset,
) {
    let width = font.measure_width(text, anchor.font_size);
    ops.push(Op::StartTextSection);
    ops.push(Op::SetFontSize {
        size: Pt(anchor.font_size),
        font: font_id.clone(),
    });
    ops.push(Op::SetTextMatrix {
        matrix: TextMatrix::Translate(Pt(anchor.x - width / 2.0), Pt(anchor.y)),
    });
    ops.push(Op::WriteText {
        items: vec![TextItem::Text(text.to_string())],
        font: font_id.clone(),
    });
    ops.push(Op::EndTextSection);
}

fn require_coverage(page: u32, text: &str, font: &FontAsset) -> Result<(), GenerationError> {
    for ch in text.chars() {
        if !font.covers(ch) {
            return Err(GenerationError::Draw {
                page,
                what: format!("text {text:?}"),
                reason: format!("font has no glyph for {ch:?}"),
            });
        }
    }
    Ok(())
}

/// Build the full op list for one page: upright label, rotated label inside
/// its scoped frame, then the marker glyph.
pub fn page_ops(
    plan: &PagePlan,
    font_id: &FontId,
    font: &FontAsset,
) -> Result<Vec<Op>, GenerationError> {
    require_coverage(plan.index, &plan.label, font)?;
    let marker = font
        .first_covered(&MARKER_GLYPHS)
        .ok_or_else(|| GenerationError::Draw {
            page: plan.index,
            what: "marker glyph".to_string(),
            reason: format!("font covers none of {MARKER_GLYPHS:?}"),
        })?;

    let mut ops = Vec::new();

    draw_centered_text(&mut ops, &plan.label, plan.upright, font_id, font);

    {
        let mut scope = FrameScope::push(
            &mut ops,
            plan.frame.translate_x,
            plan.frame.translate_y,
            plan.frame.rotate_deg,
        );
        draw_centered_text(scope.ops(), &plan.label, plan.rotated, font_id, font);
    }

    draw_centered_text(&mut ops, &marker.to_string(), plan.marker, font_id, font);

    Ok(ops)
}
