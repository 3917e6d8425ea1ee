//! Main egui application — owns the controller and renders the chat panel.

use std::rc::Rc;

use egui::CentralPanel;

use chat_core::{ChatController, EchoStreamSource, EventBus};
use chat_platform::BrowserScheduler;
use chat_types::config::ChatConfig;
use chat_ui::panels::chat::{self, ChatAction};
use chat_ui::state::UiState;
use chat_ui::theme;

pub struct ChatApp {
    ui_state: UiState,
    controller: ChatController,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ChatConfig) -> Self {
        let source = Rc::new(EchoStreamSource::new(
            Rc::new(BrowserScheduler),
            config.stream.clone(),
        ));
        let controller = ChatController::new(source, EventBus::new(), &config);

        Self {
            ui_state: UiState::new(),
            controller,
            first_frame: true,
        }
    }

    fn dispatch(&mut self, action: ChatAction) {
        match action {
            ChatAction::Send(submission) => {
                if !self.controller.send(&submission.text, submission.attachments) {
                    log::debug!("Send ignored");
                }
            }
            ChatAction::Clear => self.controller.clear_all(),
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.controller.event_bus().drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let is_streaming = self.controller.is_streaming();
        if is_streaming {
            // Chunks arrive from timers, not input
            ctx.request_repaint();
        }

        let dropped = chat::dropped_file_locators(ctx);
        if !dropped.is_empty() {
            self.ui_state.add_attachments(dropped);
        }

        let ui_state = &mut self.ui_state;
        let action = CentralPanel::default()
            .show(ctx, |ui| {
                self.controller
                    .with_messages(|messages| chat::chat_panel(ui, ui_state, messages, is_streaming))
            })
            .inner;

        if let Some(action) = action {
            self.dispatch(action);
            ctx.request_repaint();
        }
    }
}
