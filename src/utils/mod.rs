//! Utility modules for browser API access.
//!
//! Provides:
//! - [`dom`] - Window and URL hash helpers
//! - [`copy_text`] - Clipboard writes for code snippet copy buttons

mod clipboard;
pub mod dom;

pub use clipboard::copy_text;
