#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::theme::*;
    use chat_types::message::Role;
    use chat_types::event::ChatEvent;

    fn started() -> ChatEvent {
        ChatEvent::StreamStarted { message_id: "a1".to_string() }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert!(state.pending_attachments.is_empty());
        assert_eq!(state.status, StreamStatus::Idle);
        assert_eq!(state.status_text, "Ready");
        assert_eq!(state.chunks_received, 0);
    }

    #[test]
    fn test_ui_state_stream_lifecycle() {
        let mut state = UiState::new();

        state.process_events(vec![started()]);
        assert_eq!(state.status, StreamStatus::Streaming);
        assert_eq!(state.status_text, "Assistant is typing...");

        state.process_events(vec![
            ChatEvent::ChunkReceived { message_id: "a1".to_string() },
            ChatEvent::ChunkReceived { message_id: "a1".to_string() },
        ]);
        assert_eq!(state.chunks_received, 2);
        assert_eq!(state.status_text, "Assistant is typing... (2 chunks)");

        state.process_events(vec![ChatEvent::StreamCompleted {
            message_id: "a1".to_string(),
        }]);
        assert_eq!(state.status, StreamStatus::Idle);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_new_stream_resets_chunk_count() {
        let mut state = UiState::new();
        state.chunks_received = 7;
        state.process_events(vec![started()]);
        assert_eq!(state.chunks_received, 0);
    }

    #[test]
    fn test_chunk_count_leaves_stopped_status_alone() {
        let mut state = UiState::new();
        state.process_events(vec![
            started(),
            ChatEvent::StreamCancelled { message_id: "a1".to_string() },
            ChatEvent::ChunkReceived { message_id: "a1".to_string() },
        ]);
        assert_eq!(state.status_text, "Stopped");
        assert_eq!(state.chunks_received, 1);
    }

    #[test]
    fn test_ui_state_stream_failed() {
        let mut state = UiState::new();
        state.process_events(vec![
            started(),
            ChatEvent::StreamFailed {
                message_id: "a1".to_string(),
                error: "Delivery error: reset".to_string(),
            },
        ]);
        assert_eq!(
            state.status,
            StreamStatus::Failed("Delivery error: reset".to_string())
        );
        assert!(state.status_text.contains("reset"));
    }

    #[test]
    fn test_ui_state_cancel_then_clear() {
        let mut state = UiState::new();
        state.process_events(vec![
            started(),
            ChatEvent::StreamCancelled { message_id: "a1".to_string() },
        ]);
        assert_eq!(state.status, StreamStatus::Stopped);

        state.process_events(vec![ChatEvent::Cleared]);
        assert_eq!(state.status, StreamStatus::Idle);
        assert_eq!(state.status_text, "Ready");
    }

    // ─── Draft / Attachment Tests ────────────────────────────

    #[test]
    fn test_can_send_rules() {
        let mut state = UiState::new();
        assert!(!state.can_send(false));

        state.input_text = "   ".to_string();
        assert!(!state.can_send(false));

        state.input_text = "hi".to_string();
        assert!(state.can_send(false));
        assert!(!state.can_send(true));

        state.input_text.clear();
        state.add_attachments(vec!["file:///a.png".to_string()]);
        assert!(state.can_send(false));
    }

    #[test]
    fn test_take_submission_clears_draft() {
        let mut state = UiState::new();
        state.input_text = "hello".to_string();
        state.add_attachments(vec!["file:///a.png".to_string()]);

        let submission = state.take_submission(false).unwrap();
        assert_eq!(submission.text, "hello");
        assert_eq!(submission.attachments, vec!["file:///a.png"]);
        assert!(state.input_text.is_empty());
        assert!(state.pending_attachments.is_empty());
    }

    #[test]
    fn test_take_submission_blocked_while_streaming() {
        let mut state = UiState::new();
        state.input_text = "hello".to_string();
        assert!(state.take_submission(true).is_none());
        assert_eq!(state.input_text, "hello");
    }

    #[test]
    fn test_add_attachments_caps_each_pick() {
        let mut state = UiState::new();
        let six: Vec<String> = (0..6).map(|i| format!("file:///{}.png", i)).collect();
        assert_eq!(state.add_attachments(six), 4);
        assert_eq!(state.pending_attachments.len(), 4);
        assert_eq!(state.pending_attachments[3], "file:///3.png");

        // The cap is per pick, not per message
        assert_eq!(state.add_attachments(vec!["file:///more.png".to_string()]), 1);
        assert_eq!(state.pending_attachments.len(), 5);
    }

    #[test]
    fn test_add_attachments_skips_blank() {
        let mut state = UiState::new();
        let kept = state.add_attachments(vec!["".to_string(), "x.png".to_string()]);
        assert_eq!(kept, 1);
        assert_eq!(state.pending_attachments, vec!["x.png"]);
    }

    #[test]
    fn test_remove_attachment() {
        let mut state = UiState::new();
        state.add_attachments(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        state.remove_attachment(1);
        assert_eq!(state.pending_attachments, vec!["a", "c"]);
        state.remove_attachment(10);
        assert_eq!(state.pending_attachments.len(), 2);
    }

    // ─── Helpers ─────────────────────────────────────────────

    #[test]
    fn test_typing_dots_cycle() {
        assert_eq!(typing_dots(0.0), "●  ");
        assert_eq!(typing_dots(0.34), "●● ");
        assert_eq!(typing_dots(0.67), "●●●");
        assert_eq!(typing_dots(1.0), "●  ");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("not a time"), "");
        let formatted = format_time("2026-01-01T12:34:56+00:00");
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(&StreamStatus::Failed("x".to_string()), false), ERROR);
        assert_eq!(status_color(&StreamStatus::Streaming, true), WARNING);
        assert_eq!(status_color(&StreamStatus::Stopped, false), TEXT_SECONDARY);
        assert_eq!(status_color(&StreamStatus::Idle, false), SUCCESS);
    }

    #[test]
    fn test_role_colors_differ() {
        let (user_label, user_bg) = role_colors(Role::User);
        let (bot_label, bot_bg) = role_colors(Role::Assistant);
        assert_ne!(user_label, bot_label);
        assert_ne!(user_bg, bot_bg);
    }

    #[test]
    fn test_ui_state_default() {
        let state = UiState::default();
        assert_eq!(state.status, StreamStatus::Idle);
    }
}
