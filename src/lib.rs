//! Interaction layer of a one-page portfolio, rendered with raylib.
//!
//! Each behaviour is a headless state type driven by frame time and input
//! events; [`page::Page`] wires them to a window.

pub mod carousel;
pub mod constants;
pub mod contact_form;
pub mod cursor_glow;
pub mod mobile_menu;
pub mod navbar;
pub mod page;
pub mod scroll_reveal;
pub mod smooth_scroll;
pub mod texture_loader;
pub mod timer;
