//! Vue instance tree model
//!
//! The capability interface over live Vue instances and the pure algorithms
//! that walk it. The real page is adapted into these shapes by the capture
//! and inspect scripts; tests adapt in-memory fixtures instead.
//!
//! - `tree`: the `DomNode`/`ComponentInstance` traits and the two walks
//!   (first-root-instance over the DOM, path matching over the component
//!   tree)
//! - `snapshot`: serde adapters for the capture script's JSON
//! - `inspect`: prop/state/computed extraction from one instance's bags

pub mod inspect;
pub mod snapshot;
pub mod tree;

pub use inspect::InstanceSnapshot;
pub use snapshot::{ComponentSnapshot, DomSnapshot, ElementHandle};
pub use tree::{find_first_root_instance, find_matching_components, ComponentInstance, DomNode};
