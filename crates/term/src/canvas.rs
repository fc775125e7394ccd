//! Character canvas: a render adapter at one pixel per character cell.

use tui_life_grid::RenderAdapter;
use tui_life_types::GridError;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const GRIDLINE_FG: Rgb = Rgb::new(90, 90, 90);
const LIFE_FG: Rgb = Rgb::new(255, 80, 80);

const HORIZONTAL_LINE: char = '─';
const VERTICAL_LINE: char = '│';
const LIFE_BLOCK: char = '█';

/// Render adapter drawing into a [`FrameBuffer`].
///
/// Pixel coordinates map 1:1 onto character cells, so a `cell_size` of N
/// gives N-character grid cells. Only axis-aligned lines occur in this
/// system; anything else is clipped to its dominant axis.
#[derive(Debug)]
pub struct CharCanvas {
    fb: FrameBuffer,
}

impl CharCanvas {
    pub fn new() -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    fn line_style() -> CellStyle {
        CellStyle {
            fg: GRIDLINE_FG,
            ..CellStyle::default()
        }
    }

    fn life_style() -> CellStyle {
        CellStyle {
            fg: LIFE_FG,
            ..CellStyle::default()
        }
    }

    /// Clamp a pixel span to whole character columns/rows.
    fn span(start: f64, extent: f64, limit: u16) -> (u16, u16) {
        let lo = start.round().max(0.0) as u16;
        let hi = ((start + extent).round().max(0.0) as u16).min(limit);
        (lo.min(limit), hi)
    }
}

impl Default for CharCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderAdapter for CharCanvas {
    fn acquire_surface(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        if width == 0 || height == 0 || width > u32::from(u16::MAX) || height > u32::from(u16::MAX)
        {
            return Err(GridError::SurfaceUnavailable {
                reason: format!("unusable terminal surface {width}x{height}"),
            });
        }
        self.fb.resize(width as u16, height as u16);
        Ok(())
    }

    fn clear_all(&mut self) {
        self.fb.clear();
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let style = Self::line_style();
        if (x1 - x2).abs() <= (y1 - y2).abs() {
            // Vertical gridline.
            let x = x1.round().max(0.0) as u16;
            let (y_lo, y_hi) = Self::span(y1.min(y2), (y2 - y1).abs(), self.fb.height());
            for y in y_lo..y_hi {
                self.fb.put_char(x, y, VERTICAL_LINE, style);
            }
        } else {
            let y = y1.round().max(0.0) as u16;
            let (x_lo, x_hi) = Self::span(x1.min(x2), (x2 - x1).abs(), self.fb.width());
            for x in x_lo..x_hi {
                self.fb.put_char(x, y, HORIZONTAL_LINE, style);
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let style = Self::life_style();
        let (x_lo, x_hi) = Self::span(x, width, self.fb.width());
        let (y_lo, y_hi) = Self::span(y, height, self.fb.height());
        for cy in y_lo..y_hi {
            for cx in x_lo..x_hi {
                self.fb.put_char(cx, cy, LIFE_BLOCK, style);
            }
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let style = CellStyle::default();
        let (x_lo, x_hi) = Self::span(x, width, self.fb.width());
        let (y_lo, y_hi) = Self::span(y, height, self.fb.height());
        for cy in y_lo..y_hi {
            for cx in x_lo..x_hi {
                self.fb.put_char(cx, cy, ' ', style);
            }
        }
    }
}
