//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{paint, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CellValue;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);
const BLOCK: char = '█';

/// Colour for a cell value (1 blue, 2 red, 3 purple, 4 green, 5 yellow,
/// 6 orange, 7 aqua); `None` for empty or unknown values.
pub fn palette(value: CellValue) -> Option<Rgb> {
    match value {
        1 => Some(Rgb::new(60, 110, 235)),
        2 => Some(Rgb::new(225, 60, 60)),
        3 => Some(Rgb::new(165, 80, 205)),
        4 => Some(Rgb::new(80, 200, 95)),
        5 => Some(Rgb::new(235, 215, 70)),
        6 => Some(Rgb::new(255, 165, 0)),
        7 => Some(Rgb::new(0, 220, 220)),
        _ => None,
    }
}

/// Board layout inside a viewport (terminal coordinates of the border).
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the arena.
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square on typical terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// The whole surface is cleared first, then the arena, the active piece
    /// and the side panel are drawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(snap, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, frame, border);

        let empty = CellStyle::new(Rgb::new(70, 70, 85), BOARD_BG);
        for y in 0..snap.height {
            for x in 0..snap.width {
                self.fill_cell_rect(fb, frame, x, y, '·', empty);
            }
        }

        paint(snap, &mut |x: i32, y: i32, value: CellValue| {
            if x < 0 || y < 0 || x >= snap.width as i32 || y >= snap.height as i32 {
                return;
            }
            if let Some(fg) = palette(value) {
                let style = CellStyle::new(fg, BOARD_BG).bold();
                self.fill_cell_rect(fb, frame, x as u16, y as u16, BLOCK, style);
            }
        });

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = f.x + 1 + cell_x * self.cell_w;
        let py = f.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        for line in ["A/← D/→ move", "S/↓    drop", "Q/E  rotate", "Esc    quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
        }
    }
}
