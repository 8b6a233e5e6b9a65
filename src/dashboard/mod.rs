//! Dashboard UI Module
//!
//! The control panel window: one editor section per overlay on the left,
//! the live preview canvas on the right.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;
pub mod views;
