//! Pane registry for the kask dashboard.
//!
//! Every active keg owns one pane per [`PaneKind`]; a single tap list pane is
//! shared. Panes are stored under a typed [`PaneKey`] so repeated layout
//! passes find and reuse them instead of creating duplicates. Keg panes are
//! keyed by the keg's slot in tap order, so kegs reporting the same id still
//! get panes of their own.
//!
//! Keg panes sit in a bottom-to-top stack. The selected keg's panes are
//! moved to the top and its detail pane takes focus; the rest stay alive
//! underneath and are covered when drawn.

use std::collections::HashMap;
use std::fmt;

use kask_core::KegOnTap;
use kask_core::types::RecordId;
use ratatui::layout::{Margin, Rect};
use ratatui::text::Line;
use tracing::debug;

use crate::layout::Geometry;
use crate::theme::Theme;
use crate::widget;

/// The kinds of pane each keg owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaneKind {
    /// Beer, brewery, size, rating, description, website
    Detail,
    /// Remaining-volume meter
    FillLevel,
    /// Brewery artwork as character art
    Image,
}

impl PaneKind {
    /// All kinds in creation order.
    pub const ALL: [PaneKind; 3] = [PaneKind::Detail, PaneKind::FillLevel, PaneKind::Image];

    /// Short name used in pane identifiers.
    pub fn name(&self) -> &'static str {
        match self {
            PaneKind::Detail => "detail",
            PaneKind::FillLevel => "volume",
            PaneKind::Image => "image",
        }
    }
}

/// Registry key for a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaneKey {
    /// The shared tap list on the left
    TapList,
    /// One of a keg's own panes
    Keg {
        /// Position of the keg in tap order
        slot: usize,
        keg_id: RecordId,
        kind: PaneKind,
    },
}

impl PaneKey {
    /// Key of a keg pane.
    pub fn keg(slot: usize, keg_id: RecordId, kind: PaneKind) -> Self {
        PaneKey::Keg { slot, keg_id, kind }
    }

    /// Slot of the keg this pane belongs to, if any.
    pub fn slot(&self) -> Option<usize> {
        match self {
            PaneKey::TapList => None,
            PaneKey::Keg { slot, .. } => Some(*slot),
        }
    }

    /// The keg this pane belongs to, if any.
    pub fn keg_id(&self) -> Option<RecordId> {
        match self {
            PaneKey::TapList => None,
            PaneKey::Keg { keg_id, .. } => Some(*keg_id),
        }
    }

    fn is_detail(&self) -> bool {
        matches!(
            self,
            PaneKey::Keg {
                kind: PaneKind::Detail,
                ..
            }
        )
    }
}

impl fmt::Display for PaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneKey::TapList => write!(f, "taps"),
            PaneKey::Keg { slot, keg_id, kind } => {
                write!(f, "{}:{}:{}", slot, keg_id, kind.name())
            }
        }
    }
}

/// A rectangular, bordered region with pre-rendered content.
#[derive(Debug, Clone)]
pub struct Pane {
    key: PaneKey,
    area: Rect,
    title: Option<String>,
    wrap: bool,
    scroll: u16,
    lines: Vec<Line<'static>>,
}

impl Pane {
    /// Create the tap list pane. Content is painted separately.
    fn tap_list(area: Rect) -> Self {
        Self {
            key: PaneKey::TapList,
            area,
            title: Some("Taps".to_string()),
            wrap: false,
            scroll: 0,
            lines: Vec::new(),
        }
    }

    /// Create one of a keg's panes and render its content.
    fn for_keg(
        slot: usize,
        kind: PaneKind,
        on_tap: &KegOnTap,
        area: Rect,
        theme: &Theme,
    ) -> Self {
        let title = match kind {
            PaneKind::Detail => Some(on_tap.keg.tap.description.clone()),
            PaneKind::FillLevel => Some("Fill Level".to_string()),
            PaneKind::Image => None,
        };

        let mut pane = Self {
            key: PaneKey::keg(slot, on_tap.keg.id, kind),
            area,
            title,
            wrap: kind == PaneKind::Detail,
            scroll: 0,
            lines: Vec::new(),
        };
        pane.lines = widget::keg_pane_lines(kind, on_tap, pane.inner(), theme);
        pane
    }

    pub fn key(&self) -> PaneKey {
        self.key
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Content area inside the border.
    pub fn inner(&self) -> Rect {
        self.area.inner(Margin::new(1, 1))
    }
}

/// What a layout pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutPass {
    pub created: usize,
    pub resized: usize,
    pub removed: usize,
}

impl LayoutPass {
    /// True when the pass left every pane as it was.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.resized == 0 && self.removed == 0
    }
}

/// All panes of the dashboard, their stacking order, and focus.
#[derive(Debug, Default)]
pub struct PaneRegistry {
    panes: HashMap<PaneKey, Pane>,
    /// Keg panes, bottom to top
    stack: Vec<PaneKey>,
    focused: Option<PaneKey>,
}

impl PaneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update panes for `kegs` in the given terminal area.
    ///
    /// Missing panes are created and pushed on top of the stack. Existing
    /// panes keep their content unless their rectangle changed, in which case
    /// size-dependent content is rendered again. Panes the current layout
    /// mode does not show are dropped. Running the pass twice with the same
    /// inputs changes nothing the second time.
    pub fn layout(&mut self, kegs: &[KegOnTap], area: Rect, theme: &Theme) -> LayoutPass {
        let geometry = Geometry::compute(area);
        let mut pass = LayoutPass::default();

        let before = self.panes.len();
        self.panes.retain(|key, _| match key {
            PaneKey::TapList => true,
            PaneKey::Keg { kind, .. } => geometry.mode.shows(*kind),
        });
        pass.removed = before - self.panes.len();
        let panes = &self.panes;
        self.stack.retain(|key| panes.contains_key(key));
        if self.focused.is_some_and(|key| !self.panes.contains_key(&key)) {
            self.focused = None;
        }

        for (slot, on_tap) in kegs.iter().enumerate() {
            for kind in PaneKind::ALL {
                let Some(rect) = geometry.rect_for(kind) else {
                    continue;
                };
                let key = PaneKey::keg(slot, on_tap.keg.id, kind);
                match self.panes.get_mut(&key) {
                    Some(pane) if pane.area == rect => {}
                    Some(pane) => {
                        pane.area = rect;
                        pane.lines = widget::keg_pane_lines(kind, on_tap, pane.inner(), theme);
                        pass.resized += 1;
                    }
                    None => {
                        self.panes
                            .insert(key, Pane::for_keg(slot, kind, on_tap, rect, theme));
                        self.stack.push(key);
                        pass.created += 1;
                    }
                }
            }
        }

        match self.panes.get_mut(&PaneKey::TapList) {
            Some(pane) if pane.area == geometry.tap_list => {}
            Some(pane) => {
                pane.area = geometry.tap_list;
                pass.resized += 1;
            }
            None => {
                self.panes
                    .insert(PaneKey::TapList, Pane::tap_list(geometry.tap_list));
                pass.created += 1;
            }
        }

        if !pass.is_noop() {
            debug!(?pass, mode = ?geometry.mode, width = area.width, height = area.height, "layout pass");
        }
        pass
    }

    /// Raise every pane of the keg in `slot` to the top and focus its
    /// detail pane.
    pub fn bring_to_front(&mut self, slot: usize) {
        let (mut raised, mut rest): (Vec<PaneKey>, Vec<PaneKey>) = std::mem::take(&mut self.stack)
            .into_iter()
            .partition(|key| key.slot() == Some(slot));
        if let Some(detail) = raised.iter().find(|key| key.is_detail()) {
            self.focused = Some(*detail);
        }
        rest.append(&mut raised);
        self.stack = rest;
    }

    /// Repaint the tap list with `current` highlighted.
    ///
    /// Scrolls so the highlighted entry stays inside the pane.
    pub fn repaint_tap_list(&mut self, kegs: &[KegOnTap], current: usize, theme: &Theme) {
        if let Some(pane) = self.panes.get_mut(&PaneKey::TapList) {
            let visible = pane.inner().height as usize;
            pane.lines = widget::tap_list_lines(kegs, current, theme);
            pane.scroll = if visible == 0 {
                0
            } else {
                u16::try_from(current.saturating_sub(visible - 1)).unwrap_or(u16::MAX)
            };
        }
    }

    /// Look up a pane.
    pub fn get(&self, key: &PaneKey) -> Option<&Pane> {
        self.panes.get(key)
    }

    /// The focused pane's key.
    pub fn focused(&self) -> Option<PaneKey> {
        self.focused
    }

    /// Slot of the keg whose panes are on top of the stack.
    pub fn top_slot(&self) -> Option<usize> {
        self.stack.last().and_then(PaneKey::slot)
    }

    /// Id of the keg whose panes are on top of the stack.
    pub fn top_keg(&self) -> Option<RecordId> {
        self.stack.last().and_then(PaneKey::keg_id)
    }

    /// Keg panes from bottom to top.
    pub fn stacked(&self) -> impl Iterator<Item = &Pane> {
        self.stack.iter().filter_map(|key| self.panes.get(key))
    }

    /// Keg panes that are not completely covered by a pane above them,
    /// bottom to top.
    pub fn visible(&self) -> impl Iterator<Item = &Pane> {
        let stacked: Vec<&Pane> = self.stacked().collect();
        let covered: Vec<bool> = stacked
            .iter()
            .enumerate()
            .map(|(i, pane)| {
                stacked[i + 1..]
                    .iter()
                    .any(|above| above.area.intersection(pane.area) == pane.area)
            })
            .collect();
        stacked
            .into_iter()
            .zip(covered)
            .filter_map(|(pane, covered)| (!covered).then_some(pane))
    }

    /// Number of panes, tap list included.
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }
}
