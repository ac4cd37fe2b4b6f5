// SPDX-License-Identifier: MPL-2.0
//! Shared editor sub-state modules (crop, history, adjustment, ...).

pub mod adjustment;
pub mod crop;
pub mod enhance;
pub mod guides;
pub mod history;
mod routing;
pub mod session;
pub mod sheet;

pub use crop::{CropMode, CropSession, CropState, HandlePosition};
pub use enhance::EnhanceState;
pub use guides::GuideToggles;
pub use history::History;
pub use session::Snapshot;
pub use sheet::{SheetPreview, SheetState};
