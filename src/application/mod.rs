// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports for external collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports through Iced tasks

pub mod port;
