//! Page plans – the pure description of what goes on each page.
//!
//! A [`PagePlan`] carries absolute page coordinates for every placement, so
//! the rotated copy of the label can never influence where the marker lands.
//! Rendering (`render`) consumes plans; nothing here touches printpdf.

/// A4 portrait width in points.
pub const PAGE_WIDTH_PT: f32 = 595.28;
/// A4 portrait height in points.
pub const PAGE_HEIGHT_PT: f32 = 841.89;

/// Size of the large page-number text.
pub const NUMBER_FONT_SIZE_PT: f32 = 150.0;
/// Size of the centered marker glyph.
pub const MARKER_FONT_SIZE_PT: f32 = 250.0;

/// Upward marker candidates, in preference order. The first glyph the loaded
/// font covers is drawn.
pub const MARKER_GLYPHS: [char; 2] = ['▲', '^'];

/// A horizontally-centered baseline anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    /// Horizontal center of the string.
    pub x: f32,
    /// Baseline height.
    pub y: f32,
    pub font_size: f32,
}

/// A scoped coordinate frame: translate then rotate, applied only to the
/// placement drawn inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedFrame {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Counter-clockwise rotation in degrees.
    pub rotate_deg: f32,
}

/// Everything drawn on one page, derived solely from the page index.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    /// 1-based page index.
    pub index: u32,
    /// Decimal rendering of the index: no padding, no separators.
    pub label: String,
    /// Axis-aligned label placement.
    pub upright: TextAnchor,
    /// Frame for the rotated copy of the label.
    pub frame: RotatedFrame,
    /// Label placement in the frame's local coordinates.
    pub rotated: TextAnchor,
    /// Marker glyph placement, in absolute page coordinates.
    pub marker: TextAnchor,
}

impl PagePlan {
    pub fn for_page(index: u32) -> Self {
        PagePlan {
            index,
            label: index.to_string(),
            upright: TextAnchor {
                x: PAGE_WIDTH_PT / 2.0,
                y: PAGE_HEIGHT_PT * 0.7,
                font_size: NUMBER_FONT_SIZE_PT,
            },
            frame: RotatedFrame {
                translate_x: PAGE_WIDTH_PT * 0.25,
                translate_y: PAGE_HEIGHT_PT * 0.5,
                rotate_deg: 90.0,
            },
            rotated: TextAnchor {
                x: 0.0,
                y: 0.0,
                font_size: NUMBER_FONT_SIZE_PT,
            },
            marker: TextAnchor {
                x: PAGE_WIDTH_PT / 2.0,
                y: PAGE_HEIGHT_PT / 2.5,
                font_size: MARKER_FONT_SIZE_PT,
            },
        }
    }
}

/// Plans for pages `1..=page_count`, in order.
pub fn plan_document(page_count: u32) -> Vec<PagePlan> {
    (1..=page_count).map(PagePlan::for_page).collect()
}
