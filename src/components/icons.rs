//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuClipboard as Clipboard,
        LuClipboardCheck as ClipboardCheck, LuCloud as Cloud, LuCpu as Cpu,
        LuExternalLink as ExternalLink, LuGlobe as Network, LuHouse as Home,
        LuLayoutGrid as Grid, LuList as List, LuLock as Lock, LuMenu as Menu, LuPlug as Plug,
        LuSearch as Search, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsClipboard as Clipboard,
        BsClipboardCheck as ClipboardCheck, BsCloud as Cloud, BsCpu as Cpu, BsGlobe as Network,
        BsGrid as Grid, BsHouseFill as Home, BsList as Menu, BsListUl as List,
        BsLockFill as Lock, BsPlug as Plug, BsSearch as Search, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLIPBOARD, Clipboard);
themed_icon!(CLIPBOARD_CHECK, ClipboardCheck);
themed_icon!(CLOSE, Close);
themed_icon!(CLOUD, Cloud);
themed_icon!(CPU, Cpu);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(GRID, Grid);
themed_icon!(HOME, Home);
themed_icon!(LIST, List);
themed_icon!(LOCK, Lock);
themed_icon!(MENU, Menu);
themed_icon!(NETWORK, Network);
themed_icon!(PLUG, Plug);
themed_icon!(SEARCH, Search);
