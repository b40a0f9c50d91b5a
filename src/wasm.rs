//! WebAssembly bindings for the calculator.
//!
//! This module provides JavaScript-friendly wrappers around the engine.
//! Browsers have no threads for the expiry timer, so conversion mode hands
//! its ticket to JavaScript, which schedules `expireConvertMode(ticket)`
//! with `setTimeout`.

use wasm_bindgen::prelude::*;
use crate::{Config, Engine, ModeTicket};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly calculator wrapper.
#[wasm_bindgen]
pub struct WasmCalculator {
    engine: Engine,
    config: Config,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a new calculator.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Create a calculator from a JSON config
    /// (`{ "history_window": 10, "convert_timeout_ms": 5000 }`).
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WasmCalculator, JsError> {
        let config = Config::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::from_config(config))
    }

    /// Append a key. Returns false if it was ignored.
    #[wasm_bindgen(js_name = appendToken)]
    pub fn append_token(&mut self, token: char) -> bool {
        self.engine.append_token(token)
    }

    #[wasm_bindgen]
    pub fn backspace(&mut self) {
        self.engine.backspace();
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Evaluate the equation. Returns the display string (result or error).
    #[wasm_bindgen]
    pub fn evaluate(&mut self) -> String {
        match self.engine.evaluate() {
            Ok(Some(eval)) => eval.formatted_result,
            Ok(None) => String::new(),
            Err(e) => e.to_string(),
        }
    }

    /// Equation with display glyphs.
    #[wasm_bindgen(getter)]
    pub fn equation(&self) -> String {
        self.engine.display_equation()
    }

    /// Current result display, or an empty string.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.engine.result_display().unwrap_or_default().to_string()
    }

    #[wasm_bindgen(js_name = toBinary)]
    pub fn to_binary(&mut self) -> String {
        self.engine.convert_to_binary().to_string()
    }

    #[wasm_bindgen(js_name = toFraction)]
    pub fn to_fraction(&mut self) -> String {
        self.engine.convert_to_fraction().to_string()
    }

    /// Toggle conversion mode. Returns the ticket to expire later, or 0 when
    /// the mode was left.
    #[wasm_bindgen(js_name = toggleConvertMode)]
    pub fn toggle_convert_mode(&mut self) -> u64 {
        self.engine.toggle_convert_mode().map_or(0, ModeTicket::id)
    }

    /// Apply a scheduled expiry. Returns true if the mode reverted.
    #[wasm_bindgen(js_name = expireConvertMode)]
    pub fn expire_convert_mode(&mut self, ticket: u64) -> bool {
        self.engine.expire_convert_mode(ModeTicket::from_id(ticket))
    }

    #[wasm_bindgen(js_name = isConvertMode)]
    pub fn is_convert_mode(&self) -> bool {
        self.engine.mode().is_convert()
    }

    /// Milliseconds to wait before calling `expireConvertMode`.
    #[wasm_bindgen(js_name = convertTimeoutMs)]
    pub fn convert_timeout_ms(&self) -> u32 {
        u32::try_from(self.config.convert_timeout_ms).unwrap_or(u32::MAX)
    }

    /// Recent history lines, oldest first.
    #[wasm_bindgen(js_name = recentHistory)]
    pub fn recent_history(&self, limit: usize) -> js_sys::Array {
        self.engine
            .recent_history(limit)
            .iter()
            .map(|entry| JsValue::from_str(&entry.to_string()))
            .collect()
    }

    /// Full history as a JSON array.
    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.engine.history().all())
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl WasmCalculator {
    fn from_config(config: Config) -> Self {
        Self {
            engine: Engine::with_config(&config),
            config,
        }
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}
