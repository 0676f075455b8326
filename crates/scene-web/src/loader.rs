use scene_core::{load_scene_root, LoadError, ModelConfig, SceneRoot};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn unavailable(path: &str, reason: impl Into<String>) -> LoadError {
    LoadError::Unavailable {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn js_reason(e: wasm_bindgen::JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn fetch_bytes(path: &str) -> Result<Vec<u8>, LoadError> {
    let window = web::window().ok_or_else(|| unavailable(path, "no window"))?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| unavailable(path, js_reason(e)))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| unavailable(path, js_reason(e)))?;
    if !response.ok() {
        return Err(unavailable(path, format!("HTTP {}", response.status())));
    }
    let body = response
        .array_buffer()
        .map_err(|e| unavailable(path, js_reason(e)))?;
    let buffer = JsFuture::from(body)
        .await
        .map_err(|e| unavailable(path, js_reason(e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch and parse the model asset.
pub async fn load_model(config: &ModelConfig) -> Result<SceneRoot, LoadError> {
    let bytes = fetch_bytes(config.path).await?;
    log::info!("[model] fetched {} ({} bytes)", config.path, bytes.len());
    load_scene_root(&bytes, config.transform)
}
