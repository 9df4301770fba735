//! Board rendering for the Othello GUI

use crate::rules::count_flips;
use crate::{Board, Color, Move};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Everything the board needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_turn: Color,
    pub legal_moves: &'a [Move],
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
    /// Accept clicks and show hover previews
    pub interactive: bool,
    pub show_legal_moves: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked legal move, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Move> {
        let available_size = ui.available_size();
        self.size = frame.board.size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.grid_rect(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, frame.board);

        if frame.show_legal_moves && frame.interactive {
            for &mv in frame.legal_moves {
                painter.circle_filled(self.board_to_screen(mv), LEGAL_MOVE_RADIUS, legal_move_marker());
            }
        }

        if let Some(mv) = frame.last_move {
            self.draw_last_move_marker(&painter, mv);
        }

        if let Some(mv) = frame.suggested_move {
            self.draw_suggestion(&painter, mv, frame.current_turn);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if frame.interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(mv) = self.screen_to_board(pointer_pos) {
                    let is_legal = frame.legal_moves.contains(&mv);
                    if frame.board.is_empty(mv) {
                        self.draw_hover_preview(&painter, frame.board, mv, frame.current_turn, is_legal);
                    }

                    if response.clicked() && is_legal {
                        clicked = Some(mv);
                    }
                }
            }
        }

        clicked
    }

    /// Playing area inside the margin
    fn grid_rect(&self) -> Rect {
        let side = self.cell_size * self.size as f32;
        Rect::from_min_size(self.board_rect.min + Vec2::splat(BOARD_MARGIN), Vec2::splat(side))
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let grid = self.grid_rect();

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [Pos2::new(grid.min.x + offset, grid.min.y), Pos2::new(grid.min.x + offset, grid.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(grid.min.x, grid.min.y + offset), Pos2::new(grid.max.x, grid.min.y + offset)],
                stroke,
            );
        }
    }

    /// Draw 0-based row and column indices, matching move coordinates
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let grid = self.grid_rect();

        for i in 0..self.size {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;
            let label = i.to_string();

            // Columns, top
            let pos = Pos2::new(self.board_rect.min.x + center, grid.min.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), COORD_TEXT);

            // Rows, left
            let pos = Pos2::new(grid.min.x - BOARD_MARGIN * 0.5, self.board_rect.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), COORD_TEXT);
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for row in 0..self.size as u8 {
            for col in 0..self.size as u8 {
                let mv = Move::new(row, col);
                if let Some(color) = board.get(mv).color() {
                    self.draw_disc(painter, mv, color);
                }
            }
        }
    }

    /// Draw a single disc with a drop shadow
    fn draw_disc(&self, painter: &Painter, mv: Move, color: Color) {
        let center = self.board_to_screen(mv);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 70),
        );

        match color {
            Color::Dark => {
                painter.circle_filled(center, radius, DARK_DISC);
                painter.circle_filled(center + Vec2::splat(-radius * 0.3), radius * 0.2, DARK_DISC_HIGHLIGHT);
            }
            Color::Light => {
                painter.circle_filled(center, radius, LIGHT_DISC);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, LIGHT_DISC_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, mv: Move) {
        let center = self.board_to_screen(mv);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, mv: Move, turn: Color) {
        let center = self.board_to_screen(mv);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        painter.circle_filled(center, radius, ghost(turn, 110));
        painter.circle_stroke(center, radius, Stroke::new(2.0, SUGGESTION_RING));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(16.0),
            match turn {
                Color::Dark => LIGHT_DISC,
                Color::Light => DARK_DISC,
            },
        );
    }

    /// Ghost disc on hover, with the number of discs it would flip
    fn draw_hover_preview(&self, painter: &Painter, board: &Board, mv: Move, turn: Color, is_legal: bool) {
        let center = self.board_to_screen(mv);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        if !is_legal {
            painter.circle_filled(center, radius, hover_illegal());
            return;
        }

        painter.circle_filled(center, radius, ghost(turn, 90));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            format!("+{}", count_flips(board, mv, turn)),
            egui::FontId::proportional(14.0),
            match turn {
                Color::Dark => LIGHT_DISC,
                Color::Light => DARK_DISC,
            },
        );
    }

    /// Convert screen coordinates to a board square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.grid_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Move::is_valid(row, col, self.size).then(|| Move::new(row as u8, col as u8))
    }

    /// Convert a board square to the screen position of its center
    pub fn board_to_screen(&self, mv: Move) -> Pos2 {
        let grid = self.grid_rect();
        Pos2::new(
            grid.min.x + (mv.col as f32 + 0.5) * self.cell_size,
            grid.min.y + (mv.row as f32 + 0.5) * self.cell_size,
        )
    }
}

/// Translucent disc of the given color
fn ghost(color: Color, alpha: u8) -> Color32 {
    match color {
        Color::Dark => Color32::from_rgba_unmultiplied(20, 20, 20, alpha),
        Color::Light => Color32::from_rgba_unmultiplied(245, 245, 245, alpha),
    }
}
