use dioxus::logger::tracing::warn;

/// Shows a blocking message to the user.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!(message, "no window to alert on");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        warn!(message, err = %describe(err), "alert failed");
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn describe(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn alert(message: &str) {
    warn!(message, "user notification");
}
