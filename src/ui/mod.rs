//! User Interface Module
//!
//! Rendering only. Screens read `App` and never change it.

pub mod colors;
pub mod components;
pub mod highlight;
pub mod reference;
pub mod start_page;
