//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavSection`], [`NavEntry`], [`PageMeta`] - Navigation tree representation
//! - [`AppRoute`] - Hash-based navigation for static-host compatibility

mod nav;
mod route;

pub use nav::{NavEntry, NavSection, PageMeta};
pub use route::AppRoute;
