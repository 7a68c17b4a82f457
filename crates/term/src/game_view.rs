//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{format_u32, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GRID_SIZE};

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

/// Advice panel contents, borrowed from whoever owns the advisor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdviceView<'a> {
    /// No advisor configured
    Off,
    Idle,
    Pending,
    Ready {
        direction: Direction,
        confidence: f32,
        reasoning: &'a str,
    },
    Failed(&'a str),
}

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const EMPTY_BG: Rgb = Rgb::new(84, 78, 72);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits "131072" with a margin and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        advice: AdviceView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, values) in snap.board.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        let help = CellStyle::new(Rgb::new(150, 150, 150), PANEL_BG).dim();
        fb.put_str(
            start_x,
            start_y.saturating_add(frame_h),
            "arrows/hjkl move  u undo  r restart  ? advice  q quit",
            help,
        );

        self.draw_side_panel(fb, snap, advice, viewport, start_x + frame_w + 2, start_y);

        if snap.won {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " YOU WIN! c: keep going ");
        } else if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER  r: restart ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, advice: AdviceView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, advice, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: u32) {
        // One column of board background between tiles.
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let inner_w = self.cell_w.saturating_sub(1).max(1);

        if value == 0 {
            let style = CellStyle::new(Rgb::new(120, 112, 104), EMPTY_BG).dim();
            fb.fill_rect(px, py, inner_w, self.cell_h, ' ', style);
            fb.put_char(px + inner_w / 2, py + self.cell_h / 2, '·', style);
            return;
        }

        let style = tile_style(value);
        fb.fill_rect(px, py, inner_w, self.cell_h, ' ', style);

        let mut digits = [0u8; 10];
        let len = format_u32(value, &mut digits) as u16;
        let tx = px + inner_w.saturating_sub(len) / 2;
        let ty = py + self.cell_h / 2;
        for (i, &d) in digits[..len as usize].iter().enumerate() {
            if (i as u16) < inner_w {
                fb.put_char(tx + i as u16, ty, d as char, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        advice: AdviceView<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        let end = fb.put_u32(panel_x, y, snap.score, value);
        if snap.last_score_delta > 0 {
            let gain = CellStyle::new(Rgb::new(120, 220, 120), PANEL_BG);
            let after_plus = fb.put_str(end + 1, y, "+", gain);
            fb.put_u32(after_plus, y, snap.last_score_delta, gain);
        }
        y += 2;

        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.best_score, value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.moves, value);
        y += 2;

        fb.put_str(panel_x, y, "UNDO", label);
        y += 1;
        fb.put_str(panel_x, y, if snap.can_undo { "ready" } else { "-" }, value);
        y += 2;

        fb.put_str(panel_x, y, "ADVICE", label);
        y += 1;
        match advice {
            AdviceView::Off => {
                fb.put_str(panel_x, y, "OFF", value.dim());
            }
            AdviceView::Idle => {
                fb.put_str(panel_x, y, "press ?", value.dim());
            }
            AdviceView::Pending => {
                fb.put_str(panel_x, y, "thinking...", value);
            }
            AdviceView::Ready {
                direction,
                confidence,
                reasoning,
            } => {
                let strong = CellStyle::new(confidence_color(confidence), PANEL_BG).bold();
                let x = fb.put_str(panel_x, y, direction.as_str(), strong);
                fb.put_char(x + 1, y, direction.arrow(), strong);
                let pct = (confidence.clamp(0.0, 1.0) * 100.0).round() as u32;
                let x = fb.put_u32(x + 3, y, pct, value);
                fb.put_str(x, y, "%  enter: play", value.dim());
                y += 1;
                wrap_into(fb, panel_x, y, panel_w, 4, reasoning, value.dim());
            }
            AdviceView::Failed(message) => {
                let err = CellStyle::new(Rgb::new(240, 90, 80), PANEL_BG);
                wrap_into(fb, panel_x, y, panel_w, 4, message, err);
            }
        }
    }
}

/// Width reserved for the side panel when centring the board
const PANEL_WIDTH: u16 = 26;

fn tile_style(value: u32) -> CellStyle {
    let exp = value.trailing_zeros();
    let bg = match exp {
        1 => Rgb::new(238, 228, 218),
        2 => Rgb::new(237, 224, 200),
        3 => Rgb::new(242, 177, 121),
        4 => Rgb::new(245, 149, 99),
        5 => Rgb::new(246, 124, 95),
        6 => Rgb::new(246, 94, 59),
        7 => Rgb::new(237, 207, 114),
        8 => Rgb::new(237, 204, 97),
        9 => Rgb::new(237, 200, 80),
        10 => Rgb::new(237, 197, 63),
        11 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    };
    let fg = if exp <= 2 {
        Rgb::new(119, 110, 101)
    } else {
        Rgb::new(249, 246, 242)
    };
    CellStyle::new(fg, bg).bold()
}

fn confidence_color(confidence: f32) -> Rgb {
    if confidence >= 0.8 {
        Rgb::new(76, 175, 80)
    } else if confidence >= 0.6 {
        Rgb::new(255, 152, 0)
    } else {
        Rgb::new(244, 67, 54)
    }
}

/// Greedy word wrap into at most `max_lines` rows.
fn wrap_into(fb: &mut FrameBuffer, x: u16, y: u16, width: u16, max_lines: u16, text: &str, style: CellStyle) {
    let width = width as usize;
    let mut line = 0u16;
    let mut col = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if col > 0 && col + 1 + len > width {
            line += 1;
            col = 0;
        }
        if line >= max_lines {
            return;
        }
        if col > 0 {
            col += 1;
        }
        fb.put_str(x + col as u16, y + line, word, style);
        col += len;
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16, text: &str) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}
