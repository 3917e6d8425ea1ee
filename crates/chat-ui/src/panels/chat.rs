//! Chat panel — transcript, typing indicator, attachments and input bar.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_types::message::ChatMessage;
use crate::state::{format_time, typing_dots, Submission, UiState};
use crate::theme::*;

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Send(Submission),
    Clear,
}

/// Render the chat panel. The transcript is read-only here; every change
/// goes back to the caller as a `ChatAction`.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    messages: &[ChatMessage],
    is_streaming: bool,
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Chat").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let clear_enabled = !messages.is_empty();
                        if ui
                            .add_enabled(clear_enabled, egui::Button::new("Clear"))
                            .clicked()
                        {
                            action = Some(ChatAction::Clear);
                        }
                        let color = status_color(&state.status, is_streaming);
                        ui.label(RichText::new(&state.status_text).color(color).small());
                    });
                });

                ui.separator();

                // Transcript
                let reserved = if state.pending_attachments.is_empty() { 60.0 } else { 90.0 };
                let available_height = ui.available_height() - reserved;
                let time = ui.input(|i| i.time);
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if messages.is_empty() {
                            ui.label(
                                RichText::new("Send a message to start the conversation.")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }
                        for message in messages {
                            render_message(ui, message, time);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);

                // Pending attachments
                if !state.pending_attachments.is_empty() {
                    let mut remove = None;
                    ui.horizontal_wrapped(|ui| {
                        for (idx, locator) in state.pending_attachments.iter().enumerate() {
                            ui.label(RichText::new(attachment_name(locator)).color(TEXT_SECONDARY).small());
                            if ui.small_button("✕").clicked() {
                                remove = Some(idx);
                            }
                        }
                    });
                    if let Some(idx) = remove {
                        state.remove_attachment(idx);
                    }
                }

                // Input bar
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Message... (drop files to attach)")
                        .desired_width(ui.available_width() - 70.0)
                        .interactive(!is_streaming)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add(input);

                    let send_enabled = state.can_send(is_streaming);
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        if let Some(submission) = state.take_submission(is_streaming) {
                            action = Some(ChatAction::Send(submission));
                            response.request_focus();
                        }
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage, time: f64) {
    let (label_color, bg) = role_colors(message.role);

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(message.role.label()).color(label_color).strong().small());
                ui.label(
                    RichText::new(format_time(&message.timestamp))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });

            for locator in &message.attachments {
                ui.label(
                    RichText::new(format!("📎 {}", attachment_name(locator)))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            }

            if message.is_awaiting_first_chunk() {
                ui.label(RichText::new(typing_dots(time)).color(ACCENT));
            } else if !message.content.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
                    if message.streaming {
                        ui.label(RichText::new("▌").color(ACCENT).strong());
                    }
                });
            }
        });
}

/// Last path segment of a locator, for compact display
fn attachment_name(locator: &str) -> &str {
    locator
        .rsplit(['/', '\\'])
        .find(|s| !s.is_empty())
        .unwrap_or(locator)
}

/// Locators for files dropped onto the window this frame
pub fn dropped_file_locators(ctx: &egui::Context) -> Vec<String> {
    ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .map(|f| match &f.path {
                Some(path) => path.display().to_string(),
                None => f.name.clone(),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::attachment_name;

    #[test]
    fn test_attachment_name() {
        assert_eq!(attachment_name("file:///photos/cat.png"), "cat.png");
        assert_eq!(attachment_name("C:\\pics\\dog.jpg"), "dog.jpg");
        assert_eq!(attachment_name("plain"), "plain");
        assert_eq!(attachment_name("dir/"), "dir");
    }
}
