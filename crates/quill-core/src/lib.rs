//! quill-core: shared leaf types for the quill widget toolkit.
//!
//! - 2D geometry used by widgets and text hit-testing
//! - the width-measurement oracle consumed by the line wrapper

pub mod geometry;
pub mod metrics;

pub use geometry::{Point, Rect};
pub use metrics::{AdvanceTable, FixedAdvance, TextMetrics};
