mod config;
mod dom;
mod network;
mod state;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use clanboard_api::MenuEntry;
use state::ViewState;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount()
}

fn mount() -> Result<(), JsValue> {
    let win = window().ok_or("no global `window` exists")?;

    let state = Rc::new(RefCell::new(ViewState::default()));

    // Initial layout, before any resize event fires
    apply_frame_height(&state, &win);
    dom::set_active_menu(state.borrow().active_entry);

    setup_menu_navigation(&win)?;
    setup_resize_listener(&win, &state)?;

    let state_init = state.clone();
    spawn_local(async move {
        init_dashboard(&state_init).await;
    });

    Ok(())
}

fn apply_frame_height(state: &Rc<RefCell<ViewState>>, win: &web_sys::Window) {
    let viewport = win
        .document()
        .and_then(|d| d.document_element())
        .map_or(0, |el| el.client_height());
    let mut st = state.borrow_mut();
    st.apply_viewport_height(viewport);
    dom::set_frame_height(st.frame_height);
}

/// One click listener per menu entry; selection is a full page navigation
fn setup_menu_navigation(win: &web_sys::Window) -> Result<(), JsValue> {
    let doc = win.document().ok_or("should have a document on window")?;
    for entry in MenuEntry::ALL {
        if let Some(el) = doc.get_element_by_id(&format!("menu-{}", entry.key())) {
            let cb = Closure::wrap(Box::new(move || {
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(entry.path());
                }
            }) as Box<dyn FnMut()>);
            el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
    }
    Ok(())
}

/// Keep the embedded frame sized to the viewport.
/// Writes only `frame_height`; the fetch path never races it.
fn setup_resize_listener(
    win: &web_sys::Window,
    state: &Rc<RefCell<ViewState>>,
) -> Result<(), JsValue> {
    let state = state.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(el) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let mut st = state.borrow_mut();
            st.apply_viewport_height(el.client_height());
            dom::set_frame_height(st.frame_height);
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

/// The page's single async step: fetch configuration, resolve the ranking
/// site. Both failure kinds end in the same dialog; no retry.
async fn init_dashboard(state: &Rc<RefCell<ViewState>>) {
    let page = match config::read_page_config() {
        Ok(c) => c,
        Err(e) => {
            let msg = e.as_string().unwrap_or_else(|| format!("{e:?}"));
            web_sys::console::warn_1(&format!("[clan-rank] page config: {msg}").into());
            dom::show_error_dialog(&msg);
            return;
        }
    };

    web_sys::console::log_1(&"[clan-rank] requesting group data".into());
    match network::fetch_dashboard_data(&page.api_url, &page.csrf_token).await {
        Ok(data) => {
            let mut st = state.borrow_mut();
            st.apply_group_data(&data);
            web_sys::console::log_1(&format!("[clan-rank] game server: {}", st.game_server).into());
            if st.rank_url.is_empty() {
                // Unrecognized region: the embed stays blank, not an error
                web_sys::console::warn_1(
                    &format!("[clan-rank] no ranking site for {}", st.game_server).into(),
                );
            } else {
                dom::set_frame_src(&st.rank_url);
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[clan-rank] load failed: {err}").into());
            dom::show_error_dialog(&err.to_string());
        }
    }
}
