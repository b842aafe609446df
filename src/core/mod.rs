//! Core logic for the documentation shell.
//!
//! This module provides:
//! - [`Registry`] validated navigation registry with search and resolution
//! - [`ExpansionState`] per-section expand/collapse state
//! - [`PanelState`] the mobile navigation panel state machine
//! - [`RegistryError`] construction-time validation failures

pub mod error;
mod expansion;
mod panel;
mod registry;

pub use error::RegistryError;
pub use expansion::ExpansionState;
pub use panel::{PanelEvent, PanelState};
pub use registry::Registry;
