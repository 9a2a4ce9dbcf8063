//! Tree edit list WASM bindings.
//!
//! Lets TypeScript build an edit list field by field, or load one from a
//! stored JSON object.

use crate::types::to_js_error;
use wasm_bindgen::prelude::*;

/// Tree edits wrapper for JavaScript
#[wasm_bindgen]
pub struct TreeEdits {
    inner: tritree_core::TreeEdits,
}

#[wasm_bindgen]
impl TreeEdits {
    /// Create an empty edit list
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: tritree_core::TreeEdits::new(),
        }
    }

    /// Get the prune tolerance, or undefined when pruning is off
    #[wasm_bindgen(getter)]
    pub fn prune_tolerance(&self) -> Option<f64> {
        self.inner.prune_tolerance
    }

    /// Set the prune tolerance; undefined turns pruning off
    #[wasm_bindgen(setter)]
    pub fn set_prune_tolerance(&mut self, value: Option<f64>) {
        self.inner.prune_tolerance = value;
    }

    #[wasm_bindgen(getter)]
    pub fn flip_horizontal(&self) -> bool {
        self.inner.flip_horizontal
    }

    #[wasm_bindgen(setter)]
    pub fn set_flip_horizontal(&mut self, value: bool) {
        self.inner.flip_horizontal = value;
    }

    /// Get the number of counter-clockwise quarter turns
    #[wasm_bindgen(getter)]
    pub fn quarter_turns_ccw(&self) -> u8 {
        self.inner.quarter_turns_ccw
    }

    /// Set the number of counter-clockwise quarter turns
    #[wasm_bindgen(setter)]
    pub fn set_quarter_turns_ccw(&mut self, value: u8) {
        self.inner.quarter_turns_ccw = value;
    }

    /// Check if the edits would leave a tree unchanged
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Check the edits without applying them.
    pub fn validate(&self) -> Result<(), JsValue> {
        self.inner.validate().map_err(to_js_error)
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<TreeEdits, JsValue> {
        let inner: tritree_core::TreeEdits =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for TreeEdits {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeEdits {
    pub(crate) fn inner(&self) -> &tritree_core::TreeEdits {
        &self.inner
    }
}
