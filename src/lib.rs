//! TabShell — a multi-tab browser shell engine with virtual internal pages
//! and session persistence.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
