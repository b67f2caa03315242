//! Blocking Browser Dialogs

/// Show a blocking `window.alert`
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[DIALOG] no window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("[DIALOG] alert failed: {:?}", e);
    }
}
