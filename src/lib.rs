//! Vue-Lens: Vue.js component selectors for browser test automation
//!
//! This library resolves component-path selectors (`"list item"`) against a
//! live page's Vue instance tree and inspects resolved components' props,
//! reactive state and computed values. The page itself is reached through a
//! narrow evaluation trait supplied by the embedding test runtime.

pub mod config;
pub mod error;

pub mod inspector;
pub mod page;
pub mod resolver;
pub mod selector;
pub mod vue;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use inspector::VueInstanceInspector;
pub use resolver::{Resolution, VueSelectorResolver};
pub use vue::ElementHandle;

/// Vue-Lens library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
