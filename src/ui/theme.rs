//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - felt green
pub const BOARD_BG: Color32 = Color32::from_rgb(34, 120, 70);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(24, 70, 42);
pub const GRID_LINE: Color32 = Color32::from_rgb(16, 60, 34);
pub const COORD_TEXT: Color32 = Color32::from_rgb(200, 225, 205);

// Disc colors
pub const DARK_DISC: Color32 = Color32::from_rgb(25, 25, 30);
pub const DARK_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const LIGHT_DISC: Color32 = Color32::from_rgb(250, 250, 252);
pub const LIGHT_DISC_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const SUGGESTION_RING: Color32 = Color32::from_rgb(255, 200, 60);

// Functions for colors that can't be const
pub fn legal_move_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_illegal() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const DISC_RADIUS_RATIO: f32 = 0.4;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const LEGAL_MOVE_RADIUS: f32 = 6.0;
