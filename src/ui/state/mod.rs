// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! View-independent state shared by the editor canvas and the sheet preview.

pub mod drag;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use viewport::Viewport;
pub use zoom::{ZoomFactor, ZoomStep};
