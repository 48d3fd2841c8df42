//! Page context trait
//!
//! This module defines the abstract interface for the page the selectors
//! run against. The real implementation is supplied by the embedding test
//! runtime (a CDP session, a WebDriver page, an embedded engine); Vue-Lens
//! only ever asks it to evaluate scripts.

use async_trait::async_trait;

/// JavaScript evaluation result
#[derive(Debug, Clone)]
pub enum EvaluationResult {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Object(serde_json::Value),
}

/// Page context trait
///
/// Represents a page/tab the selector machinery evaluates scripts in.
#[async_trait]
pub trait PageContext: Send + Sync + std::fmt::Debug {
    /// Get page ID
    fn id(&self) -> &str;

    /// Evaluate JavaScript
    async fn evaluate(
        &self,
        script: &str,
        await_promise: bool,
    ) -> Result<EvaluationResult, crate::Error>;

    /// Check if page is active
    fn is_active(&self) -> bool;
}
