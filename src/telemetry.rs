use crate::config::{EffectsConfig, LogLevel};
use serde_json::{Map, Number, Value};

/// Emits one structured JSON line when `level` is at or above the configured
/// threshold.
pub fn log_event(config: &EffectsConfig, level: LogLevel, event: &str, fields: Value) {
    if let Some(line) = format_event(config.log_level, level, now_millis(), event, fields) {
        write_line(level, &line);
    }
}

fn format_event(
    threshold: LogLevel,
    level: LogLevel,
    ts: f64,
    event: &str,
    fields: Value,
) -> Option<String> {
    if level < threshold {
        return None;
    }

    let mut payload = Map::new();
    payload.insert(
        "ts".to_string(),
        Number::from_f64(ts.floor()).map(Value::Number).unwrap_or(Value::Null),
    );
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(Value::Object(payload).to_string())
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: LogLevel, line: &str) {
    println!("{line}");
}
