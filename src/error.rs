use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("skills data is malformed: {0}")]
    SkillsData(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}
