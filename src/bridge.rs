//! Decoding of inbound `{ sentiment, emotion, keywords }` objects from JS.

use aura_core::StateUpdate;
use wasm_bindgen::JsValue;

/// Read an update from a plain JS object. Non-objects, missing fields and
/// wrongly typed fields all fall back to the update defaults.
pub fn decode_update(value: &JsValue) -> StateUpdate {
    let sentiment = field(value, "sentiment").and_then(|v| v.as_f64());
    let emotion = field(value, "emotion").and_then(|v| v.as_string());
    let keywords = field(value, "keywords")
        .filter(js_sys::Array::is_array)
        .map(|v| {
            js_sys::Array::from(&v)
                .iter()
                .filter_map(|k| k.as_string())
                .collect::<Vec<_>>()
        });
    StateUpdate::from_parts(sentiment, emotion.as_deref(), keywords)
}

fn field(obj: &JsValue, key: &str) -> Option<JsValue> {
    if !obj.is_object() {
        return None;
    }
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}
