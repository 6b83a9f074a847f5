//! Event Handling Module
//!
//! - **`keys`**: keyboard input processing and navigation
//! - **`clipboard`**: background clipboard writes and their outcomes

pub mod clipboard;
pub mod keys;
