//! Main menu and leaderboard screens.

use crate::core::RecordEntry;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::MenuItem;

/// What the menu screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState<'a> {
    pub selected: MenuItem,
    pub rows: u8,
    pub cols: u8,
    pub player: &'a str,
}

const TITLE: &str = "P I P E S";
const ACCENT: Rgb = Rgb::new(70, 150, 255);
const BOX_W: u16 = 34;

#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    pub fn render_menu_into(&self, state: &MenuState<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let box_h = MenuItem::ALL.len() as u16 * 2 + 6;
        let (x, y) = centered(viewport, BOX_W, box_h);
        fb.draw_frame(x, y, BOX_W, box_h, CellStyle::default());
        fb.put_str_centered(x, BOX_W, y + 1, TITLE, CellStyle::new(ACCENT, Rgb::BLACK).bold());

        let normal = CellStyle::default();
        let selected = CellStyle::new(Rgb::BLACK, ACCENT).bold();
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let row = y + 3 + i as u16 * 2;
            let style = if *item == state.selected { selected } else { normal };
            let text = match item {
                MenuItem::Rows => format!("< Rows    {:>2} >", state.rows),
                MenuItem::Columns => format!("< Columns {:>2} >", state.cols),
                other => other.label().to_string(),
            };
            fb.put_str_centered(x, BOX_W, row, &text, style);
        }

        let hint = CellStyle::default().dim();
        let who = format!("player: {}", state.player);
        fb.put_str_centered(x, BOX_W, y + box_h - 2, &who, hint);
    }

    /// Entries in rank order; the row for `player` is highlighted.
    pub fn render_leaderboard_into(
        &self,
        ranked: &[&RecordEntry],
        player: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let visible = (viewport.height.saturating_sub(8) as usize).min(ranked.len());
        let box_w = 48;
        let box_h = visible.max(1) as u16 + 6;
        let (x, y) = centered(viewport, box_w, box_h);
        fb.draw_frame(x, y, box_w, box_h, CellStyle::default());
        fb.put_str_centered(x, box_w, y + 1, "LEADERBOARD", CellStyle::new(ACCENT, Rgb::BLACK).bold());

        let head = CellStyle::default().bold();
        fb.put_str(x + 2, y + 3, &row_text("#", "player", "score", "board", "time", "moves"), head);

        if ranked.is_empty() {
            fb.put_str_centered(x, box_w, y + 4, "no records yet", CellStyle::default().dim());
        }
        for (i, entry) in ranked.iter().take(visible).enumerate() {
            let style = if entry.player == player {
                CellStyle::new(ACCENT, Rgb::BLACK).bold()
            } else {
                CellStyle::default()
            };
            let text = row_text(
                &(i + 1).to_string(),
                &entry.player,
                &entry.score.to_string(),
                &entry.board_label(),
                &crate::core::format_clock(entry.elapsed_secs.saturating_mul(crate::types::TICKS_PER_SECOND)),
                &entry.moves.to_string(),
            );
            fb.put_str(x + 2, y + 4 + i as u16, &text, style);
        }

        fb.put_str_centered(x, box_w, y + box_h - 1, " esc: back ", CellStyle::default().dim());
    }
}

fn centered(viewport: Viewport, w: u16, h: u16) -> (u16, u16) {
    (
        viewport.width.saturating_sub(w) / 2,
        viewport.height.saturating_sub(h) / 2,
    )
}

fn row_text(rank: &str, player: &str, score: &str, board: &str, time: &str, moves: &str) -> String {
    let player: String = player.chars().take(12).collect();
    format!("{:>2} {:<12} {:>9} {:>5} {:>5} {:>5}", rank, player, score, board, time, moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(fb: &FrameBuffer, needle: &str) -> Option<u16> {
        (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
    }

    fn entry(player: &str, score: u32) -> RecordEntry {
        RecordEntry {
            player: player.to_string(),
            score,
            rows: 9,
            cols: 9,
            elapsed_secs: 75,
            moves: 12,
        }
    }

    #[test]
    fn menu_lists_items_and_sizes() {
        let state = MenuState {
            selected: MenuItem::Rows,
            rows: 12,
            cols: 30,
            player: "ana",
        };
        let mut fb = FrameBuffer::new(0, 0);
        MenuView.render_menu_into(&state, Viewport::new(80, 24), &mut fb);

        assert!(contains(&fb, "P I P E S").is_some());
        assert!(contains(&fb, "Play").is_some());
        assert!(contains(&fb, "Rows    12").is_some());
        assert!(contains(&fb, "Columns 30").is_some());
        assert!(contains(&fb, "Quit").is_some());
        assert!(contains(&fb, "ana").is_some());
    }

    #[test]
    fn selected_item_is_highlighted() {
        let state = MenuState {
            selected: MenuItem::Quit,
            rows: 9,
            cols: 9,
            player: "ana",
        };
        let mut fb = FrameBuffer::new(0, 0);
        MenuView.render_menu_into(&state, Viewport::new(80, 24), &mut fb);
        let y = contains(&fb, "Quit").unwrap();
        let x = fb.row_text(y).chars().position(|c| c == 'Q').unwrap() as u16;
        assert_eq!(fb.get(x, y).unwrap().style.bg, ACCENT);
    }

    #[test]
    fn leaderboard_rows_in_order() {
        let a = entry("ana", 900);
        let b = entry("bo", 400);
        let mut fb = FrameBuffer::new(0, 0);
        MenuView.render_leaderboard_into(&[&a, &b], "bo", Viewport::new(80, 24), &mut fb);

        let ya = contains(&fb, "ana").unwrap();
        let yb = contains(&fb, "bo ").unwrap();
        assert!(ya < yb);
        assert!(fb.row_text(ya).contains("01:15"));
        assert!(fb.row_text(ya).contains("9x9"));
    }

    #[test]
    fn empty_leaderboard_message() {
        let mut fb = FrameBuffer::new(0, 0);
        MenuView.render_leaderboard_into(&[], "ana", Viewport::new(80, 24), &mut fb);
        assert!(contains(&fb, "no records yet").is_some());
    }
}
