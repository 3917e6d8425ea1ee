//! Chat palette and the egui visuals built from it.

use egui::{Color32, CornerRadius, Stroke, Vec2, Visuals};
use chat_types::message::Role;

use crate::state::StreamStatus;

// Slate background with a teal accent
pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 24, 31);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(28, 37, 46);
pub const BG_SURFACE: Color32 = Color32::from_rgb(44, 56, 68);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(19, 78, 74);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
pub const ACCENT: Color32 = Color32::from_rgb(45, 212, 191);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
pub const WARNING: Color32 = Color32::from_rgb(251, 191, 36);
pub const SUCCESS: Color32 = Color32::from_rgb(134, 239, 172);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(14.0, 10.0);

/// Label colour and bubble fill for a message author
pub fn role_colors(role: Role) -> (Color32, Color32) {
    match role {
        Role::User => (ACCENT, USER_BUBBLE),
        Role::Assistant => (SUCCESS, BG_SECONDARY),
    }
}

/// Colour of the header status line
pub fn status_color(status: &StreamStatus, is_streaming: bool) -> Color32 {
    match status {
        StreamStatus::Failed(_) => ERROR,
        _ if is_streaming => WARNING,
        StreamStatus::Stopped => TEXT_SECONDARY,
        _ => SUCCESS,
    }
}

/// Install the chat visuals on top of egui's dark defaults
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_SECONDARY;
    visuals.extreme_bg_color = BG_SECONDARY;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = USER_BUBBLE;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    visuals.widgets.hovered.weak_bg_fill = BG_SURFACE;
    ctx.set_visuals(visuals);
}
