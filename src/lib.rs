//! Product Compare Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod services;
/// Application state management
///
/// Handles the product model, the read-only catalog and its persistence.
pub mod state;
