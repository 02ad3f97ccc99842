//! Pane content and rendering for the kask dashboard.
//!
//! Content builders turn a keg into the lines a pane shows at a given inner
//! size. [`PaneView`] draws a [`Pane`] with its border, title, and focus
//! state.

use kask_core::{Keg, KegOnTap};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::ascii_art;
use crate::pane::{Pane, PaneKind};
use crate::theme::Theme;

/// Meter glyph for beer still in the keg.
pub const FILLED_GLYPH: char = '▓';
/// Meter glyph for beer already poured.
pub const EMPTY_GLYPH: char = '░';
/// Rule drawn across the detail pane.
pub const DIVIDER_GLYPH: char = '~';

/// Number of filled cells in a meter `width` cells wide.
///
/// `width - floor(width * removed / initial)`, clamped to `0..=width`.
pub fn fill_split(width: u16, keg: &Keg) -> usize {
    let width = f64::from(width);
    let poured = (width * keg.removed_fraction()).floor();
    (width - poured).clamp(0.0, width) as usize
}

/// The fill meter bar for a keg.
pub fn fill_meter_line(keg: &Keg, width: u16, theme: &Theme) -> Line<'static> {
    let filled = fill_split(width, keg);
    let empty = usize::from(width) - filled;

    Line::from(vec![
        Span::styled(
            FILLED_GLYPH.to_string().repeat(filled),
            Style::default().fg(theme.colors.fill),
        ),
        Span::styled(
            EMPTY_GLYPH.to_string().repeat(empty),
            Style::default().fg(theme.colors.fill_empty),
        ),
    ])
}

/// Detail pane text for a keg.
pub fn detail_lines(on_tap: &KegOnTap, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let keg = &on_tap.keg;
    let beer = &keg.beer;
    let divider_style = Style::default().fg(theme.colors.divider);
    let divider = DIVIDER_GLYPH.to_string().repeat(usize::from(width));

    vec![
        Line::styled(divider.clone(), divider_style),
        Line::raw(beer.name.clone()),
        Line::raw(beer.brewery.name.clone()),
        Line::default(),
        Line::raw(format!(
            "{} Barrel {} ABV {} Rating",
            keg.size,
            beer.abv,
            on_tap.rating_label()
        )),
        Line::default(),
        Line::styled(divider, divider_style),
        Line::raw(beer.description.clone()),
        Line::default(),
        Line::styled(
            beer.brewery.website.clone(),
            Style::default().fg(theme.colors.link),
        ),
    ]
}

/// Tap list text with the `current` entry highlighted.
pub fn tap_list_lines(kegs: &[KegOnTap], current: usize, theme: &Theme) -> Vec<Line<'static>> {
    kegs.iter()
        .enumerate()
        .map(|(i, on_tap)| {
            let name = on_tap.keg.beer.name.clone();
            if i == current {
                Line::styled(name, theme.selected_style())
            } else {
                Line::raw(name)
            }
        })
        .collect()
}

/// Content of one of a keg's panes, sized for the pane's `inner` area.
pub fn keg_pane_lines(
    kind: PaneKind,
    on_tap: &KegOnTap,
    inner: Rect,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match kind {
        PaneKind::Detail => detail_lines(on_tap, inner.width, theme),
        PaneKind::FillLevel => vec![fill_meter_line(&on_tap.keg, inner.width, theme)],
        PaneKind::Image => on_tap
            .keg
            .beer
            .brewery
            .image
            .as_ref()
            .map(|art| ascii_art::render(art, inner.width, inner.height))
            .unwrap_or_default(),
    }
}

/// Draws a pane over whatever is beneath it.
#[derive(Debug)]
pub struct PaneView<'a> {
    pane: &'a Pane,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PaneView<'a> {
    /// Create a view of `pane`.
    pub fn new(pane: &'a Pane, theme: &'a Theme) -> Self {
        Self {
            pane,
            focused: false,
            theme,
        }
    }

    /// Set whether the pane has input focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for PaneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));
        if let Some(title) = self.pane.title() {
            block = block.title(Span::styled(
                format!(" {} ", title),
                self.theme.title_style(self.focused),
            ));
        }

        let mut paragraph = Paragraph::new(self.pane.lines().to_vec())
            .style(Style::default().fg(self.theme.colors.text))
            .block(block)
            .scroll((self.pane.scroll(), 0));
        if self.pane.wrap() {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kask_core::{Beer, Brewery};

    fn keg(initial: f64, removed: f64) -> Keg {
        Keg {
            initial_volume: initial,
            removed_volume: removed,
            ..Default::default()
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample() -> KegOnTap {
        KegOnTap {
            active: 1,
            net_vote: 5,
            user_vote: 1,
            keg: Keg {
                id: 12,
                size: "1/2".to_string(),
                initial_volume: 15.5,
                removed_volume: 4.0,
                beer: Beer {
                    name: "Tank 7".to_string(),
                    description: "Farmhouse ale".to_string(),
                    abv: 8.5,
                    brewery: Brewery {
                        name: "Boulevard".to_string(),
                        website: "https://www.boulevard.com".to_string(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_full_keg_is_all_filled() {
        for width in [1, 7, 10, 80] {
            assert_eq!(fill_split(width, &keg(10.0, 0.0)), usize::from(width));
        }
    }

    #[test]
    fn test_empty_keg_is_all_empty() {
        for width in [1, 7, 10, 80] {
            assert_eq!(fill_split(width, &keg(10.0, 10.0)), 0);
        }
    }

    #[test]
    fn test_half_keg_split() {
        for width in [1u16, 7, 10, 81] {
            let expected = usize::from(width) - (f64::from(width) * 0.5).floor() as usize;
            assert_eq!(fill_split(width, &keg(10.0, 5.0)), expected);
        }
        assert_eq!(fill_split(7, &keg(10.0, 5.0)), 4);
    }

    #[test]
    fn test_fill_split_clamps_bad_volumes() {
        assert_eq!(fill_split(10, &keg(10.0, 25.0)), 0);
        assert_eq!(fill_split(10, &keg(10.0, -5.0)), 10);
        assert_eq!(fill_split(10, &keg(0.0, 0.0)), 0);
    }

    #[test]
    fn test_fill_meter_line() {
        let line = fill_meter_line(&keg(10.0, 5.0), 10, &Theme::default());
        assert_eq!(line_text(&line), "▓▓▓▓▓░░░░░");
        assert_eq!(line.width(), 10);
    }

    #[test]
    fn test_detail_lines_layout() {
        let lines = detail_lines(&sample(), 8, &Theme::default());
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(text[0], "~~~~~~~~");
        assert_eq!(text[1], "Tank 7");
        assert_eq!(text[2], "Boulevard");
        assert_eq!(text[4], "1/2 Barrel 8.5 ABV +5 Rating");
        assert_eq!(text[6], "~~~~~~~~");
        assert_eq!(text[7], "Farmhouse ale");
        assert_eq!(text[9], "https://www.boulevard.com");
    }

    #[test]
    fn test_tap_list_highlights_exactly_one_line() {
        let theme = Theme::default();
        let kegs: Vec<KegOnTap> = (0..5)
            .map(|i| {
                let mut k = sample();
                k.keg.beer.name = format!("Beer {i}");
                k
            })
            .collect();

        for current in 0..kegs.len() {
            let lines = tap_list_lines(&kegs, current, &theme);
            let highlighted: Vec<usize> = lines
                .iter()
                .enumerate()
                .filter(|(_, line)| line.style == theme.selected_style())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(highlighted, vec![current]);
            assert_eq!(line_text(&lines[current]), format!("Beer {current}"));
        }
    }

    #[test]
    fn test_image_pane_without_artwork_is_blank() {
        let lines = keg_pane_lines(
            PaneKind::Image,
            &sample(),
            Rect::new(0, 0, 20, 10),
            &Theme::default(),
        );
        assert!(lines.is_empty());
    }
}
