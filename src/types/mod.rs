// TabShell shared type definitions
// Each submodule defines types used across the engine.

pub mod bookmark;
pub mod errors;
pub mod history;
pub mod location;
pub mod session;
pub mod settings;
pub mod tab;
