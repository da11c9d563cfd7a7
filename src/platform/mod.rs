// Platform-specific data directory resolution.
//
// Each OS gets its own module; `cfg(target_os)` picks the right one at
// compile time and `get_data_dir` is the single cross-platform entry point.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Where TabShell keeps its session database.
///
/// - **Linux**: `$XDG_DATA_HOME/tabshell`, else `~/.local/share/tabshell`
/// - **macOS**: `~/Library/Application Support/TabShell`
/// - **Windows**: `%APPDATA%/TabShell`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
