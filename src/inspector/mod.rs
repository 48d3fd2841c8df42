//! Instance inspector
//!
//! Reads the current props, reactive state and computed values of the Vue
//! instance attached to an already-resolved element. Inspecting an element
//! with no attached instance is a legitimate query and yields `None`, never
//! an error.

#[cfg(test)]
mod tests;

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::page::{EvaluationResult, PageContext};
use crate::resolver::scripts;
use crate::vue::{ElementHandle, InstanceSnapshot};

/// Instance inspector
///
/// Pure reads against one element per call; no state is held between
/// invocations.
pub struct VueInstanceInspector {
    page: Arc<dyn PageContext>,
}

impl VueInstanceInspector {
    /// Create a new inspector
    pub fn new(page: Arc<dyn PageContext>) -> Self {
        Self { page }
    }

    /// Current value of one declared prop
    ///
    /// `None` when the element carries no instance or the name is not a
    /// declared prop.
    #[instrument(skip(self))]
    pub async fn prop_value(&self, element: &ElementHandle, name: &str) -> Result<Option<Value>> {
        Ok(self
            .snapshot(element)
            .await?
            .and_then(|instance| instance.prop(name)))
    }

    /// Current value of one reactive-state entry
    ///
    /// Keys that are also declared props or vuex getters are not state and
    /// yield `None`.
    #[instrument(skip(self))]
    pub async fn state_value(&self, element: &ElementHandle, name: &str) -> Result<Option<Value>> {
        Ok(self
            .snapshot(element)
            .await?
            .and_then(|instance| instance.state(name)))
    }

    /// Current value of one computed property
    #[instrument(skip(self))]
    pub async fn computed_value(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<Value>> {
        Ok(self
            .snapshot(element)
            .await?
            .and_then(|instance| instance.computed(name)))
    }

    /// Fetch the raw instance bags for one element
    ///
    /// `None` when the element has no attached instance.
    async fn snapshot(&self, element: &ElementHandle) -> Result<Option<InstanceSnapshot>> {
        debug!("Inspecting element: ref_index={}", element.ref_index);

        let script = scripts::inspect_script(element.ref_index);
        let result = self.page.evaluate(&script, true).await?;

        match result {
            EvaluationResult::String(json) => Ok(serde_json::from_str(&json)?),
            other => Err(Error::evaluation(format!(
                "Unexpected evaluation result: {:?}",
                other
            ))),
        }
    }
}
