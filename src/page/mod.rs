//! Page evaluation boundary
//!
//! The only capability Vue-Lens requires from the outside world is the
//! ability to evaluate a JavaScript expression inside a page and get the
//! result back. This module defines that seam and a mock implementation
//! for tests.

pub mod mock;
pub mod traits;

pub use mock::MockPage;
pub use traits::{EvaluationResult, PageContext};
