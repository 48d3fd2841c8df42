//! Resolution planning
//!
//! Deciding *how* to resolve a selector is separated from actually walking
//! the page: [`ResolvePlan::build`] is a pure function over the probed page
//! environment and the selector argument, so every branch (fallback, root,
//! component path, version rejection) is testable without a browser.

use serde::Deserialize;

use super::path::ComponentPath;
use crate::error::{Error, Result};

/// Minimum Vue major version the instance-tree shape is understood for
///
/// This is a hard compatibility floor: the `$children`/`_data`/`$options`
/// shape this crate reads differs across major versions.
pub const MIN_SUPPORTED_VUE_MAJOR: u32 = 2;

/// Probed page environment
///
/// Deserialized from the probe script's JSON result.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvironment {
    /// Whether the Vue global is present on the page
    pub detected: bool,
    /// Reported `Vue.version`, when present
    pub version: Option<String>,
}

impl PageEnvironment {
    /// Parse the major component of the reported version
    pub fn major_version(&self) -> Option<u32> {
        self.version
            .as_deref()
            .and_then(|version| version.split('.').next())
            .and_then(|major| major.trim().parse().ok())
    }
}

/// Resolution strategy for one selector against one probed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvePlan {
    /// No Vue on the page: degrade to a plain structural (CSS) query
    StructuralFallback(Option<String>),
    /// Select the root instance's rendered element
    Root,
    /// Walk the component instance tree against a parsed path
    Components(ComponentPath),
}

impl ResolvePlan {
    /// Build the plan for a selector against a probed environment
    ///
    /// The empty-string selector falls into the root branch because the
    /// original selector string is checked for emptiness, not the parsed
    /// token list; a whitespace-only selector is non-empty and produces an
    /// empty component path that matches nothing.
    pub fn build(env: &PageEnvironment, selector: Option<&str>) -> Result<Self> {
        if !env.detected {
            return Ok(ResolvePlan::StructuralFallback(
                selector.map(str::to_string),
            ));
        }

        match env.major_version() {
            Some(major) if major >= MIN_SUPPORTED_VUE_MAJOR => {}
            _ => {
                return Err(Error::unsupported_vue_version(format!(
                    "vue-lens supports Vue version {}.x and newer, page reports {:?}",
                    MIN_SUPPORTED_VUE_MAJOR, env.version
                )))
            }
        }

        match selector {
            None => Ok(ResolvePlan::Root),
            Some(selector) if selector.is_empty() => Ok(ResolvePlan::Root),
            Some(selector) => Ok(ResolvePlan::Components(ComponentPath::parse(selector))),
        }
    }
}
