//! Delivery of session events to the frontend. Intents are one-shot, so
//! the bridge fires and forgets: a global callback hook if the page
//! installed one, otherwise a DOM CustomEvent on window.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit};

/// Hand an event to the page. `detail` crosses the boundary as a plain
/// JS object. Outside a browser (native tests, workers without a
/// window) this quietly does nothing.
pub fn emit_os_event(event_type: &str, detail: &serde_json::Value) {
    let Some(win) = window() else {
        return;
    };

    let detail_js = serde_wasm_bindgen::to_value(detail).unwrap_or(JsValue::NULL);

    // prefer the direct callback - dom events can be missed while the
    // page is still wiring up listeners
    if let Ok(hook) = js_sys::Reflect::get(win.as_ref(), &"__osCallback".into()) {
        if hook.is_function() {
            if let Ok(cb) = hook.dyn_into::<js_sys::Function>() {
                match cb.call2(&JsValue::NULL, &event_type.into(), &detail_js) {
                    Ok(_) => return,
                    Err(e) => web_sys::console::error_2(
                        &"[hypros] __osCallback threw, falling back to dom event:".into(),
                        &e,
                    ),
                }
            }
        }
    }

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail_js);
    match CustomEvent::new_with_event_init_dict(event_type, &init) {
        Ok(event) => {
            let _ = win.dispatch_event(&event);
        }
        Err(e) => {
            web_sys::console::error_2(&"[hypros] could not create event:".into(), &e);
        }
    }
}
