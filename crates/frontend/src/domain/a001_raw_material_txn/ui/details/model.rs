use crate::shared::api_utils::api_url;
use contracts::domain::a001_raw_material_txn::aggregate::{RawMaterialTxn, RawMaterialTxnDto};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Authoritative server-side validation and recalculation
pub async fn normalize(dto: &RawMaterialTxnDto) -> Result<RawMaterialTxn, String> {
    let body = serde_json::to_string(dto).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let url = api_url("/api/a001/raw-material-txn/normalize");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if resp.status() == 422 {
        let body: ErrorBody = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
        return Err(body.error);
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
