//! Selector planning
//!
//! The pure, synchronous half of selector resolution: validating the
//! user-supplied selector argument, parsing component paths and deciding
//! which resolution strategy applies to a probed page. Nothing in this
//! module touches a page.

pub mod path;
pub mod plan;

pub use path::{selector_from_value, ComponentPath};
pub use plan::{PageEnvironment, ResolvePlan, MIN_SUPPORTED_VUE_MAJOR};
