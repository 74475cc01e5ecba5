//! Host-page configuration
//!
//! The dashboard templates embed a `csrf_token` global; deployments that
//! mount the API elsewhere can set `window.CLANBOARD_CONFIG.apiUrl`.
//! Both are read once at mount.

use wasm_bindgen::JsValue;
use web_sys::window;

/// Default relative endpoint, one level above the page directory
const DEFAULT_API_URL: &str = "../api/";

pub struct PageConfig {
    pub api_url: String,
    pub csrf_token: String,
}

pub fn read_page_config() -> Result<PageConfig, JsValue> {
    let win = window().ok_or("no window")?;

    let csrf_token = js_sys::Reflect::get(&win, &"csrf_token".into())?
        .as_string()
        .ok_or("csrf_token global missing")?;

    let config = js_sys::Reflect::get(&win, &"CLANBOARD_CONFIG".into())?;
    let api_url = if config.is_undefined() {
        DEFAULT_API_URL.to_string()
    } else {
        js_sys::Reflect::get(&config, &"apiUrl".into())?
            .as_string()
            .unwrap_or_else(|| {
                web_sys::console::warn_1(
                    &"CLANBOARD_CONFIG found but apiUrl unset, using default".into(),
                );
                DEFAULT_API_URL.to_string()
            })
    };

    Ok(PageConfig {
        api_url,
        csrf_token,
    })
}
