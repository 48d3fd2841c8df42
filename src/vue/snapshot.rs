//! Snapshot adapters
//!
//! Serde mirrors of the page trees the capture script serializes. The
//! script is a mechanical serializer; these types carry its output into the
//! pure walks in [`tree`](super::tree).

use serde::{Deserialize, Serialize};

use super::tree::{ComponentInstance, DomNode};

/// Handle to one DOM element resolved on the page
///
/// `ref_index` addresses the element in the in-page reference registry the
/// capture (or fallback) script populated, so later inspection scripts can
/// reach the same node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Index into the in-page element registry
    pub ref_index: usize,
    /// Tag the element was matched under (component tag, or DOM tag for
    /// structural fallback results)
    #[serde(default)]
    pub tag: String,
}

/// One serialized component instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    /// Component tag: `$options.name`, registered tag or source file, in
    /// that order; empty when the component is anonymous
    #[serde(default)]
    pub tag: String,
    /// Registry index of the instance's rendered root element
    pub ref_index: usize,
    /// Child instances in document order
    #[serde(default)]
    pub children: Vec<ComponentSnapshot>,
}

/// One serialized DOM node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomSnapshot {
    /// The attached instance back-reference, when present
    #[serde(default)]
    pub instance: Option<ComponentSnapshot>,
    /// Child nodes in document order (pruned below instance-carrying nodes)
    #[serde(default)]
    pub children: Vec<DomSnapshot>,
}

impl ComponentInstance for ComponentSnapshot {
    type Element = ElementHandle;

    fn tag(&self) -> &str {
        &self.tag
    }

    fn root_element(&self) -> ElementHandle {
        ElementHandle {
            ref_index: self.ref_index,
            tag: self.tag.clone(),
        }
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl DomNode for DomSnapshot {
    type Instance = ComponentSnapshot;

    fn attached_instance(&self) -> Option<&ComponentSnapshot> {
        self.instance.as_ref()
    }

    fn child_nodes(&self) -> &[Self] {
        &self.children
    }
}
