//! Mock page implementation for testing
//!
//! This module provides a scripted [`PageContext`] so the resolver and
//! inspector can be exercised without a browser. The mock dispatches on the
//! banner comment each generated script carries and answers with canned
//! JSON documents describing a fictional page.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::traits::{EvaluationResult, PageContext};
use crate::resolver::scripts;
use crate::Error;

/// Mock page
///
/// Answers the probe, capture, structural and inspect scripts with
/// configurable JSON fixtures.
#[derive(Debug)]
pub struct MockPage {
    id: String,
    is_active: AtomicBool,
    probe: RwLock<Value>,
    tree: RwLock<Value>,
    structural: RwLock<Value>,
    instances: RwLock<HashMap<usize, Value>>,
}

impl MockPage {
    /// Create a mock page without any Vue global
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            is_active: AtomicBool::new(true),
            probe: RwLock::new(json!({ "detected": false, "version": null })),
            tree: RwLock::new(json!({ "instance": null, "children": [] })),
            structural: RwLock::new(json!([])),
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// Create a mock page reporting the given Vue version
    pub fn with_vue(version: &str) -> Self {
        let page = Self::new();
        page.set_probe(json!({ "detected": true, "version": version }));
        page
    }

    /// Set the probe response
    pub fn set_probe(&self, value: Value) {
        *self.probe.write().unwrap() = value;
    }

    /// Set the captured DOM/component tree
    pub fn set_tree(&self, value: Value) {
        *self.tree.write().unwrap() = value;
    }

    /// Set the structural fallback query result
    pub fn set_structural(&self, value: Value) {
        *self.structural.write().unwrap() = value;
    }

    /// Register the inspect response for one element reference
    pub fn register_instance(&self, ref_index: usize, value: Value) {
        self.instances.write().unwrap().insert(ref_index, value);
    }

    /// Mark the page as closed
    pub fn close(&self) {
        self.is_active.store(false, Ordering::Relaxed);
    }

    fn json_result(value: &Value) -> EvaluationResult {
        EvaluationResult::String(value.to_string())
    }
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageContext for MockPage {
    fn id(&self) -> &str {
        &self.id
    }

    async fn evaluate(
        &self,
        script: &str,
        _await_promise: bool,
    ) -> Result<EvaluationResult, Error> {
        if !self.is_active.load(Ordering::Relaxed) {
            return Err(Error::evaluation("Page is closed"));
        }

        if script.contains(scripts::PROBE_BANNER) {
            return Ok(Self::json_result(&self.probe.read().unwrap()));
        }

        if script.contains(scripts::CAPTURE_BANNER) {
            return Ok(Self::json_result(&self.tree.read().unwrap()));
        }

        if script.contains(scripts::STRUCTURAL_BANNER) {
            return Ok(Self::json_result(&self.structural.read().unwrap()));
        }

        if script.contains(scripts::INSPECT_BANNER) {
            let ref_index = parse_ref_index(script)
                .ok_or_else(|| Error::evaluation("Inspect script without a reference index"))?;
            let instances = self.instances.read().unwrap();
            let value = instances.get(&ref_index).cloned().unwrap_or(Value::Null);
            return Ok(Self::json_result(&value));
        }

        Ok(EvaluationResult::Null)
    }

    fn is_active(&self) -> bool {
        self.is_active.load(Ordering::Relaxed)
    }
}

/// Extract the registry index an inspect script addresses
fn parse_ref_index(script: &str) -> Option<usize> {
    let start = script.find("refs[")? + "refs[".len();
    let rest = &script[start..];
    let end = rest.find(']')?;
    rest[..end].parse().ok()
}
