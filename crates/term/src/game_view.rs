//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each board cell is three columns wide: a left connector, a centre glyph and a
//! right connector. Up/down connections are carried by the centre glyph alone.

use crate::core::{elapsed_secs, FlowStep, GameSnapshot, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, PipeKind};

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

/// Leaderboard state shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordStatus {
    /// Player's stored best before this game.
    pub best: Option<u32>,
    /// This game's score replaced the stored best.
    pub new_record: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

const BOARD_BG: Rgb = Rgb::new(24, 26, 34);
const PIPE_FG: Rgb = Rgb::new(150, 150, 160);
const WATER_FG: Rgb = Rgb::new(70, 150, 255);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 40);
const FIXED_FG: Rgb = Rgb::new(240, 200, 90);
const PANEL_W: u16 = 14;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame position for a `rows x cols` board.
    pub fn layout(&self, rows: u8, cols: u8, viewport: Viewport) -> BoardLayout {
        let frame_w = cols as u16 * self.cell_w + 2;
        let frame_h = rows as u16 + 2;
        let total_w = frame_w + 2 + PANEL_W;
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Whether the board and its frame fit the viewport.
    pub fn fits(&self, rows: u8, cols: u8, viewport: Viewport) -> bool {
        let layout = self.layout(rows, cols, viewport);
        layout.x + layout.frame_w <= viewport.width && layout.y + layout.frame_h <= viewport.height
    }

    /// Board cell under terminal position `(column, row)`.
    ///
    /// `None` while the board is hidden behind the "too small" message.
    pub fn cell_at(
        &self,
        rows: u8,
        cols: u8,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<(i8, i8)> {
        if !self.fits(rows, cols, viewport) {
            return None;
        }
        let layout = self.layout(rows, cols, viewport);
        let cx = column.checked_sub(layout.x + 1)? / self.cell_w;
        let cy = row.checked_sub(layout.y + 1)?;
        (cx < cols as u16 && cy < rows as u16).then_some((cx as i8, cy as i8))
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        record: RecordStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        if !self.fits(snap.rows, snap.cols, viewport) {
            let style = CellStyle::default().bold();
            let mid = viewport.height / 2;
            fb.put_str_centered(0, viewport.width, mid, "Terminal too small", style);
            return;
        }

        let layout = self.layout(snap.rows, snap.cols, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        fb.draw_frame(layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        for y in 0..snap.rows as i8 {
            for x in 0..snap.cols as i8 {
                if let Some(tile) = snap.tile(x, y) {
                    let wet = Wetness::at(&snap.water, x, y, tile);
                    let under_cursor = snap.cursor == (x, y) && !snap.solved;
                    self.draw_tile(fb, &layout, x as u16, y as u16, tile, wet, under_cursor);
                }
            }
        }

        self.draw_side_panel(fb, snap, record, &layout, viewport);

        if snap.paused {
            self.draw_overlay(fb, &layout, &["PAUSED", "p to resume"]);
        } else if snap.solved {
            let score = format!("SCORE {}", snap.score);
            let mut lines = vec!["SOLVED!", score.as_str()];
            if record.new_record {
                lines.push("NEW RECORD!");
            }
            lines.push("r: again  esc: menu");
            self.draw_overlay(fb, &layout, &lines);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, record: RecordStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, record, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: u16,
        y: u16,
        tile: Tile,
        wet: Wetness,
        under_cursor: bool,
    ) {
        let bg = if under_cursor { CURSOR_BG } else { BOARD_BG };
        let dry = CellStyle::new(PIPE_FG, bg);
        let water = CellStyle::new(WATER_FG, bg).bold();
        let px = layout.x + 1 + x * self.cell_w;
        let py = layout.y + 1 + y;

        let open = Sides::from_dirs(&tile.openings());
        let style_for = |side: Direction| {
            if wet.covers(side) {
                water
            } else {
                dry
            }
        };

        let left = if open.left { '─' } else { ' ' };
        let right = if open.right { '─' } else { ' ' };
        fb.put_char(px, py, heavy_if(left, wet.covers(Direction::Left)), style_for(Direction::Left));
        fb.put_char(
            px + 2,
            py,
            heavy_if(right, wet.covers(Direction::Right)),
            style_for(Direction::Right),
        );

        let centre_style = if wet.any() { water } else { dry };
        let centre = match tile.pipe {
            PipeKind::Start => 'S',
            PipeKind::End => 'E',
            PipeKind::Cross if wet.any() => wet.sides.cross_glyph(),
            _ => open.glyph(wet.any()),
        };
        let centre_style = if tile.pipe.is_fixed() {
            CellStyle { fg: FIXED_FG, ..centre_style }.bold()
        } else {
            centre_style
        };
        fb.put_char(px + 1, py, centre, centre_style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        record: RecordStatus,
        layout: &BoardLayout,
        viewport: Viewport,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = layout.y;
        fb.put_str(panel_x, y, "TIME", label);
        let secs = elapsed_secs(snap.elapsed_ticks);
        let end = fb.put_u32_padded(panel_x, y + 1, secs / 60, 2, value);
        let end = fb.put_str(end, y + 1, ":", value);
        fb.put_u32_padded(end, y + 1, secs % 60, 2, value);
        y += 3;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, snap.moves, value);
        y += 3;

        fb.put_str(panel_x, y, "SCORE", label);
        if snap.solved {
            fb.put_u32(panel_x, y + 1, snap.score, value);
        } else {
            fb.put_char(panel_x, y + 1, '-', value);
        }
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        match record.best {
            Some(best) => fb.put_u32(panel_x, y + 1, best, value),
            None => fb.put_str(panel_x, y + 1, "-", value),
        };
        y += 3;

        fb.put_str(panel_x, y, "SIZE", label);
        let end = fb.put_u32(panel_x, y + 1, snap.rows as u32, value);
        let end = fb.put_str(end, y + 1, "x", value);
        fb.put_u32(end, y + 1, snap.cols as u32, value);
        y += 3;

        if y + 1 < layout.y + layout.frame_h {
            let dim = value.dim();
            fb.put_str(panel_x, y, "arrows move", dim);
            fb.put_str(panel_x, y + 1, "spc/z rotate", dim);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[&str]) {
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let top = layout.y + layout.frame_h / 2;
        let top = top.saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16 + 2;
            let x = layout.x + layout.frame_w.saturating_sub(w) / 2;
            let y = top + i as u16;
            fb.fill_rect(x, y, w, 1, ' ', style);
            fb.put_str(x + 1, y, line, style);
        }
    }
}

/// Open sides of a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Sides {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl Sides {
    fn from_dirs(dirs: &[Direction]) -> Self {
        let mut s = Sides::default();
        for d in dirs {
            match d {
                Direction::Up => s.up = true,
                Direction::Down => s.down = true,
                Direction::Left => s.left = true,
                Direction::Right => s.right = true,
            }
        }
        s
    }

    fn glyph(&self, heavy: bool) -> char {
        let (light, bold) = match (self.up, self.down, self.left, self.right) {
            (true, true, true, true) => ('┼', '╋'),
            (false, false, true, true) => ('─', '━'),
            (true, true, false, false) => ('│', '┃'),
            (false, true, false, true) => ('┌', '┏'),
            (false, true, true, false) => ('┐', '┓'),
            (true, false, false, true) => ('└', '┗'),
            (true, false, true, false) => ('┘', '┛'),
            (true, false, false, false) => ('╵', '╹'),
            (false, true, false, false) => ('╷', '╻'),
            (false, false, true, false) => ('╴', '╸'),
            (false, false, false, true) => ('╶', '╺'),
            _ => ('·', '·'),
        };
        if heavy {
            bold
        } else {
            light
        }
    }

    /// Cross centre with only the wet elbow drawn heavy.
    fn cross_glyph(&self) -> char {
        match (self.up, self.down, self.left, self.right) {
            (true, true, true, true) => '╋',
            (true, false, true, false) => '╃',
            (true, false, false, true) => '╄',
            (false, true, true, false) => '╅',
            (false, true, false, true) => '╆',
            _ => '┼',
        }
    }
}

fn heavy_if(ch: char, heavy: bool) -> char {
    match (ch, heavy) {
        ('─', true) => '━',
        (c, _) => c,
    }
}

/// Which sides of a tile carry water.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Wetness {
    sides: Sides,
    any: bool,
}

impl Wetness {
    fn at(water: &[FlowStep], x: i8, y: i8, tile: Tile) -> Self {
        let mut wet = Wetness::default();
        for step in water.iter().filter(|s| s.x == x && s.y == y) {
            wet.any = true;
            let sides = match (tile.pipe, step.variant) {
                (PipeKind::Cross, PipeKind::Bend) => Sides::from_dirs(&tile.elbow(true)),
                (PipeKind::Cross, _) => Sides::from_dirs(&tile.elbow(false)),
                _ => Sides::from_dirs(&tile.openings()),
            };
            wet.sides.up |= sides.up;
            wet.sides.down |= sides.down;
            wet.sides.left |= sides.left;
            wet.sides.right |= sides.right;
        }
        wet
    }

    fn any(&self) -> bool {
        self.any
    }

    fn covers(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.sides.up,
            Direction::Down => self.sides.down,
            Direction::Left => self.sides.left,
            Direction::Right => self.sides.right,
        }
    }
}
