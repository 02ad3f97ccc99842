//! Character-art rendering of brewery artwork.
//!
//! The image is scaled to exactly one pixel per terminal cell. Each cell gets
//! a glyph from a brightness ramp, colored with the pixel's own RGB value.

use image::imageops::FilterType;
use kask_core::Artwork;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Glyphs from darkest to brightest.
const RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Pick the ramp glyph for a luma value.
pub fn glyph_for(luma: u8) -> char {
    let idx = (usize::from(luma) * (RAMP.len() - 1) + 127) / 255;
    RAMP[idx]
}

/// Rec. 601 luma of an RGB pixel.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    (weighted / 1000) as u8
}

/// Render `artwork` into `height` lines of `width` colored glyphs.
pub fn render(artwork: &Artwork, width: u16, height: u16) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let scaled = artwork
        .image()
        .resize_exact(u32::from(width), u32::from(height), FilterType::Triangle)
        .to_rgb8();

    scaled
        .rows()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .map(|pixel| {
                    let [r, g, b] = pixel.0;
                    Span::styled(
                        glyph_for(luma(r, g, b)).to_string(),
                        Style::default().fg(Color::Rgb(r, g, b)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn solid(color: [u8; 3]) -> Artwork {
        Artwork::new(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            17,
            9,
            Rgb(color),
        )))
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_ramp_ends() {
        assert_eq!(glyph_for(0), ' ');
        assert_eq!(glyph_for(255), '@');
        assert_eq!(glyph_for(128), '+');
    }

    #[test]
    fn test_render_fits_requested_size() {
        let lines = render(&solid([255, 255, 255]), 6, 3);
        assert_eq!(text(&lines), vec!["@@@@@@"; 3]);
    }

    #[test]
    fn test_black_renders_blank() {
        let lines = render(&solid([0, 0, 0]), 4, 2);
        assert_eq!(text(&lines), vec!["    "; 2]);
    }

    #[test]
    fn test_glyphs_carry_pixel_color() {
        let lines = render(&solid([10, 200, 30]), 2, 1);
        match lines[0].spans[0].style.fg {
            Some(Color::Rgb(r, g, b)) => assert!(g > r && g > b),
            other => panic!("expected an RGB glyph color, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_size_renders_nothing() {
        assert!(render(&solid([255, 255, 255]), 0, 5).is_empty());
        assert!(render(&solid([255, 255, 255]), 5, 0).is_empty());
    }
}
