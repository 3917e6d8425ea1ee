//! Chat App — WASM entry point.
//!
//! This crate is the composition root. It builds the browser scheduler,
//! the echo stream source and the controller, then hands them to egui.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use chat_types::config::ChatConfig;

const CANVAS_ID: &str = "chat_canvas";

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat WASM starting...");

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    // Optional JSON overrides, e.g. <canvas data-config='{"stream":{"chunk_interval_ms":60}}'>
    let config = match canvas.get_attribute("data-config") {
        Some(json) => ChatConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring data-config: {}", e);
            ChatConfig::default()
        }),
        None => ChatConfig::default(),
    };

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
