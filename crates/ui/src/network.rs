//! One-shot dashboard fetch
//!
//! The page makes exactly one request: `get_data` on mount. No retry, no
//! caching; every failure funnels into `DashboardError` so the caller has
//! a single dialog path.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, RequestMode, Response};

use clanboard_api::{DashboardError, DashboardRequest, DashboardResponse, GroupData};

fn transport(context: &str, err: &JsValue) -> DashboardError {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    DashboardError::Transport(format!("{context}: {detail}"))
}

/// POST the page's `get_data` request and unwrap the envelope
pub async fn fetch_dashboard_data(
    api_url: &str,
    csrf_token: &str,
) -> Result<GroupData, DashboardError> {
    let win = window().ok_or_else(|| DashboardError::Transport("no window".to_string()))?;

    let body = serde_json::to_string(&DashboardRequest::get_data(csrf_token))
        .map_err(|e| DashboardError::Transport(format!("encode request: {e}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(api_url, &opts).map_err(|e| transport("request", &e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| transport("headers", &e))?;

    let resp_val = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(|e| transport("fetch", &e))?;
    let resp: Response = resp_val.dyn_into().map_err(|e| transport("response", &e))?;

    if !resp.ok() {
        return Err(DashboardError::Transport(format!(
            "unexpected status {}",
            resp.status()
        )));
    }

    let text_val = JsFuture::from(resp.text().map_err(|e| transport("body", &e))?)
        .await
        .map_err(|e| transport("body", &e))?;
    let text = text_val.as_string().unwrap_or_default();

    let parsed: DashboardResponse = serde_json::from_str(&text)
        .map_err(|e| DashboardError::Transport(format!("decode response: {e}")))?;

    parsed.into_result()
}
