//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Documentation shell (sidebar, header, content region)
//! - [`content`] - Shared presentational widgets for content pages
//! - [`pages`] - The content pages and their dispatch registry
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod content;
pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;

pub use router::AppRouter;
