//! Tauri Command Wrappers
//!
//! Typed frontend bindings to backend commands.

mod todo;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend command errors arrive as JS strings
fn err_to_string(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

pub use todo::*;
