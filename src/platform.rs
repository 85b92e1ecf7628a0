//! Browser capabilities behind one seam: wall-clock time, alerts,
//! clipboard, external links, randomness, async sleeps. Web builds go
//! through the JS APIs; everything else gets a native stand-in so the
//! desktop target and the test suite stay off the wasm bindings.

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Uniform roll in `[0, 1)`.
#[cfg(target_arch = "wasm32")]
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_unit() -> f64 {
    rand::random::<f64>()
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Blocking alert. Every flow error is terminal for the attempt and ends
/// up here.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("alert: {message}");
}

/// Opens an external link in a new browsing context.
pub fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("open external link: {url}");
}

pub fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                tracing::warn!("clipboard write rejected");
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!("clipboard copy: {text}");
}

/// Human-readable timestamp for the transaction list.
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(ms: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
    String::from(date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(ms: i64) -> String {
    format!("t+{}s", ms / 1000)
}
