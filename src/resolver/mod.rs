//! Selector resolver
//!
//! Resolves a component-path selector against a live page: probes for the
//! Vue global, plans the resolution strategy, captures the page's
//! DOM/component trees and applies the pure walks. The resolver holds no
//! state between calls; every resolve runs against a fresh capture.

pub mod scripts;


use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::page::{EvaluationResult, PageContext};
use crate::selector::{selector_from_value, PageEnvironment, ResolvePlan};
use crate::vue::{
    find_first_root_instance, find_matching_components, ComponentInstance, DomSnapshot,
    ElementHandle,
};

/// Outcome of one selector resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The root instance's rendered element (no selector given)
    Element(ElementHandle),
    /// Component-path matches or structural fallback results, in document
    /// order; possibly empty
    Elements(Vec<ElementHandle>),
    /// Vue is present but no instance is mounted; a legitimate "no match",
    /// not an error
    NoRootInstance,
}

impl Resolution {
    /// Whether the resolution carries at least one element
    pub fn has_elements(&self) -> bool {
        match self {
            Resolution::Element(_) => true,
            Resolution::Elements(elements) => !elements.is_empty(),
            Resolution::NoRootInstance => false,
        }
    }
}

/// Selector resolver
///
/// Stateless given its page; safe to share across calls.
pub struct VueSelectorResolver {
    page: Arc<dyn PageContext>,
    config: Config,
}

impl VueSelectorResolver {
    /// Create a resolver with default configuration
    pub fn new(page: Arc<dyn PageContext>) -> Self {
        Self::with_config(page, Config::default())
    }

    /// Create a resolver with the given configuration
    pub fn with_config(page: Arc<dyn PageContext>, config: Config) -> Self {
        Self { page, config }
    }

    /// Resolve a component-path selector
    ///
    /// `None` (or the empty string) selects the whole app: the root
    /// instance's rendered element. On pages without Vue the selector is
    /// used as a plain CSS query instead. Reports
    /// [`Error::UnsupportedVueVersion`] when the page carries a Vue older
    /// than the supported floor.
    #[instrument(skip(self))]
    pub async fn resolve(&self, selector: Option<&str>) -> Result<Resolution> {
        let env = self.probe().await?;
        let plan = ResolvePlan::build(&env, selector)?;
        debug!("Resolving selector: plan={:?}", plan);

        match plan {
            ResolvePlan::StructuralFallback(fallback) => {
                let elements = self.structural_query(fallback.as_deref()).await?;
                Ok(Resolution::Elements(elements))
            }
            ResolvePlan::Root => {
                let tree = self.capture_tree().await?;
                match find_first_root_instance(&tree) {
                    Some(root) => Ok(Resolution::Element(root.root_element())),
                    None => Ok(Resolution::NoRootInstance),
                }
            }
            ResolvePlan::Components(path) => {
                let tree = self.capture_tree().await?;
                match find_first_root_instance(&tree) {
                    Some(root) => Ok(Resolution::Elements(find_matching_components(root, &path))),
                    None => Ok(Resolution::NoRootInstance),
                }
            }
        }
    }

    /// Resolve an untyped selector argument
    ///
    /// Rejects defined non-string values before any script is evaluated.
    pub async fn resolve_value(&self, selector: &serde_json::Value) -> Result<Resolution> {
        let selector = selector_from_value(selector)?;
        self.resolve(selector.as_deref()).await
    }

    /// Re-resolve until the selector yields at least one element
    ///
    /// Polls on the configured interval; times out with [`Error::Timeout`]
    /// when the page never yields a match within `timeout_ms`.
    #[instrument(skip(self))]
    pub async fn wait_for(&self, selector: Option<&str>, timeout_ms: u64) -> Result<Resolution> {
        let start = std::time::Instant::now();
        let poll_interval = tokio::time::Duration::from_millis(self.config.poll_interval);

        loop {
            let resolution = self.resolve(selector).await?;
            if resolution.has_elements() {
                return Ok(resolution);
            }

            if start.elapsed().as_millis() >= timeout_ms as u128 {
                return Err(Error::timeout(format!(
                    "No match for selector {:?} within {}ms",
                    selector, timeout_ms
                )));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    async fn probe(&self) -> Result<PageEnvironment> {
        self.evaluate_json(&scripts::probe_script()).await
    }

    async fn capture_tree(&self) -> Result<DomSnapshot> {
        self.evaluate_json(&scripts::capture_tree_script()).await
    }

    async fn structural_query(&self, selector: Option<&str>) -> Result<Vec<ElementHandle>> {
        self.evaluate_json(&scripts::structural_query_script(selector))
            .await
    }

    /// Evaluate a script and deserialize its JSON string result
    async fn evaluate_json<T: DeserializeOwned>(&self, script: &str) -> Result<T> {
        let result = self.page.evaluate(script, true).await?;

        match result {
            EvaluationResult::String(json) => Ok(serde_json::from_str(&json)?),
            other => Err(Error::evaluation(format!(
                "Unexpected evaluation result: {:?}",
                other
            ))),
        }
    }
}
