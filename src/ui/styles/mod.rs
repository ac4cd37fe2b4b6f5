// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons and panel surfaces.

pub mod button;
pub mod container;
