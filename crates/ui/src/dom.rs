use wasm_bindgen::JsCast;
use web_sys::{window, Document};

use clanboard_api::MenuEntry;

/// Dialog title shared by both error kinds
const ERROR_DIALOG_TITLE: &str = "加载数据错误";

/// Get document helper
fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Point the embedded frame at the resolved ranking site
pub fn set_frame_src(url: &str) {
    if let Some(doc) = get_document() {
        if let Some(el) = doc.get_element_by_id("rank-frame") {
            if let Ok(frame) = el.dyn_into::<web_sys::HtmlIFrameElement>() {
                frame.set_src(url);
            }
        }
    }
}

/// Size the embedded frame to the current viewport
pub fn set_frame_height(px: i32) {
    if let Some(doc) = get_document() {
        if let Some(el) = doc.get_element_by_id("rank-frame") {
            if let Ok(html_el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = html_el.style().set_property("height", &format!("{px}px"));
            }
        }
    }
}

/// Highlight the page's own entry in the navigation menu
pub fn set_active_menu(active: MenuEntry) {
    if let Some(doc) = get_document() {
        for entry in MenuEntry::ALL {
            if let Some(el) = doc.get_element_by_id(&format!("menu-{}", entry.key())) {
                if entry == active {
                    let _ = el.class_list().add_1("active");
                } else {
                    let _ = el.class_list().remove_1("active");
                }
            }
        }
    }
}

/// Surface a load error through the host page's dialog widget.
///
/// Calls `window.__dialog.alert(message, title)` when the host provides
/// it, otherwise falls back to the native alert.
pub fn show_error_dialog(message: &str) {
    if let Some(win) = window() {
        if let Ok(dialog) = js_sys::Reflect::get(&win, &"__dialog".into()) {
            if !dialog.is_undefined() {
                if let Ok(alert) = js_sys::Reflect::get(&dialog, &"alert".into()) {
                    if let Some(func) = alert.dyn_ref::<js_sys::Function>() {
                        let _ = func.call2(&dialog, &message.into(), &ERROR_DIALOG_TITLE.into());
                        return;
                    }
                }
            }
        }
        let _ = win.alert_with_message(&format!("{ERROR_DIALOG_TITLE}: {message}"));
    }
}
