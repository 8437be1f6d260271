//! Terminal rendering layer.
//!
//! Transforms view models into ANSI-styled output through small components.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from application state
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Header, body rows, cards, sidebar, footer
//! - [`helpers`]: Cursor positioning, truncation, match highlighting
//! - [`theme`]: Colour schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{BodyLine, FooterInfo, HeaderInfo, Notice, NoticeTone, SidebarInfo, UIViewModel};
