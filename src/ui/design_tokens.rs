// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the palette, spacing, sizing and type scale used by every
//! editor surface.
//!
//! ```
//! use id_lens::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color { a: 0.6, ..palette::BLACK };
//! let padding = spacing::MD; // 16px
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate surfaces
    pub const SLATE_900: Color = Color::from_rgb8(17, 24, 39); // #111827
    pub const SLATE_800: Color = Color::from_rgb8(31, 41, 55); // #1f2937
    pub const SLATE_700: Color = Color::from_rgb8(55, 65, 81); // #374151
    pub const SLATE_400: Color = Color::from_rgb8(156, 163, 175); // #9ca3af

    // Accent (crop border, primary actions)
    pub const SKY_400: Color = Color::from_rgb8(56, 189, 248); // #38bdf8
    pub const SKY_500: Color = Color::from_rgb8(14, 165, 233); // #0ea5e9
    pub const SKY_600: Color = Color::from_rgb8(2, 132, 199); // #0284c7

    // AI action
    pub const VIOLET_500: Color = Color::from_rgb8(139, 92, 246); // #8b5cf6
    pub const VIOLET_600: Color = Color::from_rgb8(124, 58, 237); // #7c3aed

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb8(239, 68, 68); // #ef4444
    pub const ERROR_900: Color = Color::from_rgb8(127, 29, 29); // #7f1d1d
    pub const SUCCESS_500: Color = Color::from_rgb8(34, 197, 94); // #22c55e
    pub const WARNING_500: Color = Color::from_rgb8(245, 158, 11); // #f59e0b
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const SIDEBAR_WIDTH: f32 = 300.0;

    /// Sheet preview modal.
    pub const MODAL_WIDTH: f32 = 960.0;
    pub const MODAL_HEIGHT: f32 = 560.0;

    pub const UPLOAD_PANEL_WIDTH: f32 = 480.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}
