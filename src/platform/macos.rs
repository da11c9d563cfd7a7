// TabShell platform paths for macOS
// Data: ~/Library/Application Support/TabShell

use std::env;
use std::path::PathBuf;

/// Data directory on macOS: `~/Library/Application Support/TabShell`.
pub fn get_data_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("TabShell")
}
