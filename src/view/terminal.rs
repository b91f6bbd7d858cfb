//! Terminal drawing target for label strips.
//!
//! One pixel is one cell. Fills paint cell backgrounds, text writes one
//! character per cell in the direction the transform turns it.

use crate::host::{FontMetrics, PixelRect, Point, Rgba, Surface, TextStyle, Transform};
use crate::model::FontSpec;
use crate::view::styles::ColorConfig;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows a label's glyph box spans above its baseline.
pub const CELL_ASCENT: i32 = 2;

/// Cell-based text metrics: a character is as wide as its display width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMetrics;

impl FontMetrics for CellMetrics {
    fn string_width(&self, text: &str, _font: &FontSpec) -> i32 {
        i32::try_from(text.width()).unwrap_or(i32::MAX)
    }

    fn ascent(&self, _font: &FontSpec) -> i32 {
        CELL_ASCENT
    }
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// A [`Surface`] over a region of a ratatui [`Buffer`].
pub struct TerminalSurface<'b> {
    buf: &'b mut Buffer,
    area: Rect,
    transform: Transform,
    background: Rgba,
    colors: ColorConfig,
}

impl<'b> TerminalSurface<'b> {
    /// Draw into `area` of `buf`. Device pixel `(0, 0)` is the area's
    /// top-left cell; anything outside the area is clipped.
    pub fn new(buf: &'b mut Buffer, area: Rect, background: Rgba, colors: ColorConfig) -> Self {
        Self {
            buf,
            area,
            transform: Transform::IDENTITY,
            background,
            colors,
        }
    }

    fn position(&self, p: Point) -> Option<Position> {
        let x = u16::try_from(p.x).ok()?;
        let y = u16::try_from(p.y).ok()?;
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        Some(Position::new(self.area.x + x, self.area.y + y))
    }

    fn cell(&mut self, p: Point) -> Option<&mut Cell> {
        let pos = self.position(p)?;
        self.buf.cell_mut(pos)
    }

    /// Colour currently behind device pixel `p`.
    fn color_under(&self, p: Point) -> Rgba {
        let cell = self.position(p).and_then(|pos| self.buf.cell(pos));
        match cell.map(|c| c.bg) {
            Some(Color::Rgb(r, g, b)) => Rgba::rgb(r, g, b),
            _ => self.background,
        }
    }

    fn paint_device(&mut self, rect: PixelRect, color: Rgba) {
        let width = i32::from(self.area.width);
        let height = i32::from(self.area.height);
        let (x0, x1) = (rect.x.max(0), rect.right().min(width));
        let (y0, y1) = (rect.y.max(0), rect.bottom().min(height));
        let colors = self.colors;
        let background = self.background;
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(x, y);
                let blended = color.over(self.color_under(p));
                let Some(cell) = self.cell(p) else {
                    continue;
                };
                cell.set_symbol(" ");
                cell.modifier = Modifier::empty();
                if colors.colors_enabled() {
                    cell.set_bg(to_color(blended));
                } else if blended != background {
                    cell.modifier.insert(Modifier::REVERSED);
                }
            }
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn background(&self) -> Rgba {
        self.background
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        let device = self.transform.apply_rect(rect);
        self.paint_device(device, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        let span = PixelRect::new(
            from.x.min(to.x),
            from.y.min(to.y),
            (from.x - to.x).abs() + 1,
            (from.y - to.y).abs() + 1,
        );
        let device = self.transform.apply_rect(span);
        self.paint_device(device, color);
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let colors = self.colors;
        let bold = style.font.style.is_bold();
        let mut advance = 0;
        for ch in text.chars() {
            let width = ch.width().map_or(0, |w| i32::try_from(w).unwrap_or(0));
            if width == 0 {
                continue;
            }
            let p = self
                .transform
                .apply_pixel(Point::new(origin.x + advance, origin.y - 1));
            let fg = style.color.over(self.color_under(p));
            advance += width;
            let Some(cell) = self.cell(p) else {
                continue;
            };
            cell.set_char(ch);
            if colors.colors_enabled() {
                cell.set_fg(to_color(fg));
            }
            if bold {
                cell.modifier.insert(Modifier::BOLD);
            }
        }
    }
}
