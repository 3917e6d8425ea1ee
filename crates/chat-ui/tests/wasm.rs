//! WASM-target tests for chat-ui state.

use wasm_bindgen_test::*;

use chat_types::event::ChatEvent;
use chat_ui::state::*;

#[wasm_bindgen_test]
fn status_follows_stream_events() {
    let mut state = UiState::new();
    state.process_events(vec![ChatEvent::StreamStarted {
        message_id: "a1".to_string(),
    }]);
    assert_eq!(state.status, StreamStatus::Streaming);

    state.process_events(vec![ChatEvent::StreamCompleted {
        message_id: "a1".to_string(),
    }]);
    assert_eq!(state.status_text, "Ready");
}

#[wasm_bindgen_test]
fn dropped_files_are_capped() {
    let mut state = UiState::new();
    let dropped: Vec<String> = (0..5).map(|i| format!("f{}.txt", i)).collect();
    assert_eq!(state.add_attachments(dropped), 4);
}

#[wasm_bindgen_test]
fn rfc3339_timestamp_formats() {
    // chrono's wasmbind feature resolves the local offset through JS Date
    assert_eq!(format_time("2026-03-01T08:05:00Z").len(), 5);
}
