//! Pane geometry for the kask dashboard.
//!
//! All rectangles are derived from the terminal size as fractions of the
//! width and height, so a resize produces a proportionally scaled layout.
//!
//! Full layout (`W` x `H`):
//!
//! ```text
//! +--------+-------------------------------+
//! |        | detail   (H - floor(0.7 H))   |
//! | taps   +-------------------------------+
//! | (W/6)  | image                         |
//! |        |                               |
//! +--------+-------------------------------+
//! | fill level (max(floor(0.1 H), 3))      |
//! +----------------------------------------+
//! ```
//!
//! Compact layout keeps only the tap list (`W/4`) and a full-height detail
//! pane.

use ratatui::layout::Rect;

use crate::pane::PaneKind;

/// Smallest terminal that gets the full four-pane layout.
pub const MIN_FULL_WIDTH: u16 = 48;
pub const MIN_FULL_HEIGHT: u16 = 16;

/// The fill meter needs two border rows plus one bar row.
const FILL_MIN_HEIGHT: u16 = 3;

/// Layout mode based on terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Tap list, detail, image, and fill meter
    Full,
    /// Tap list and detail only
    Compact,
}

impl LayoutMode {
    /// Determine the layout mode based on terminal size.
    pub fn from_size(width: u16, height: u16) -> Self {
        if width >= MIN_FULL_WIDTH && height >= MIN_FULL_HEIGHT {
            LayoutMode::Full
        } else {
            LayoutMode::Compact
        }
    }

    /// Whether panes of this kind exist in this mode.
    pub fn shows(&self, kind: PaneKind) -> bool {
        match self {
            LayoutMode::Full => true,
            LayoutMode::Compact => kind == PaneKind::Detail,
        }
    }
}

/// Computed pane rectangles for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub mode: LayoutMode,
    pub tap_list: Rect,
    pub detail: Rect,
    pub image: Option<Rect>,
    pub fill: Option<Rect>,
}

/// Fill band height, top of the band, and detail pane height for a full
/// layout `h` rows tall.
fn full_heights(h: u16) -> (u16, u16, u16) {
    let fill_h = (h / 10).max(FILL_MIN_HEIGHT);
    let band_top = h - fill_h;
    // Widened: `h * 7` does not fit in u16 for tall terminals.
    let lower = u16::try_from(u32::from(h) * 7 / 10).unwrap_or(h);
    let detail_h = (h - lower).min(band_top);
    (fill_h, band_top, detail_h)
}

impl Geometry {
    /// Compute pane rectangles for the given terminal area.
    pub fn compute(area: Rect) -> Self {
        let (x, y, w, h) = (area.x, area.y, area.width, area.height);

        match LayoutMode::from_size(w, h) {
            LayoutMode::Full => {
                let tap_w = w / 6;
                let (fill_h, band_top, detail_h) = full_heights(h);

                Self {
                    mode: LayoutMode::Full,
                    tap_list: Rect::new(x, y, tap_w, band_top),
                    detail: Rect::new(x + tap_w, y, w - tap_w, detail_h),
                    image: Some(Rect::new(
                        x + tap_w,
                        y + detail_h,
                        w - tap_w,
                        band_top - detail_h,
                    )),
                    fill: Some(Rect::new(x, y + band_top, w, fill_h)),
                }
            }
            LayoutMode::Compact => {
                let tap_w = w / 4;
                Self {
                    mode: LayoutMode::Compact,
                    tap_list: Rect::new(x, y, tap_w, h),
                    detail: Rect::new(x + tap_w, y, w - tap_w, h),
                    image: None,
                    fill: None,
                }
            }
        }
    }

    /// Rectangle for a per-keg pane kind, if the mode shows it.
    pub fn rect_for(&self, kind: PaneKind) -> Option<Rect> {
        match kind {
            PaneKind::Detail => Some(self.detail),
            PaneKind::Image => self.image,
            PaneKind::FillLevel => self.fill,
        }
    }
}
